// vlcvideo-cli/src/lib.rs
//
// Library portion of the vlcvideo CLI application.
// Contains argument definitions, the scripting host and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod host;
pub mod logging;
pub mod output;
pub mod script;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, GetArgs, RunArgs, SetArgs};
pub use commands::get::run_get;
pub use commands::inspect::run_inspect;
pub use commands::run::run_file;
pub use commands::set::run_set;
pub use error::{CliErrorContext, CliResult};
pub use host::{Host, load_player};
