// vlcvideo-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vlcvideo_core::config::DEFAULT_DEINTERLACE_MODE;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vlcvideo: Scripting host for the VlcVideo bindings",
    long_about = "Binds a VlcVideo object to a simulated media engine described by a JSON \
                  profile and evaluates property reads, writes and method calls against it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Media profile (JSON) describing the simulated engine.
    /// Can also be set via the VLCVIDEO_PROFILE environment variable.
    #[arg(long, global = true, value_name = "PROFILE", env = "VLCVIDEO_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Drop VlcVideo constructor calls without a player instead of failing
    #[arg(long, global = true, default_value_t = false)]
    pub lenient: bool,

    /// Filter mode used by deinterlace.enable() without an argument
    #[arg(long, global = true, value_name = "MODE", default_value = DEFAULT_DEINTERLACE_MODE)]
    pub deinterlace_mode: String,

    /// Print values as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints every readable property of the video object
    Inspect,
    /// Reads a property path such as `contrast` or `deinterlace.mode`
    Get(GetArgs),
    /// Writes a property path and prints the value read back
    Set(SetArgs),
    /// Evaluates a script file line by line
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Property path relative to the video object
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Property path relative to the video object
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Value literal: number, quoted string, true/false or null
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file, or `-` to read from stdin
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}
