// vlcvideo-cli/src/commands/get.rs
//
// Implements `vlcvideo get PATH`.

use vlcvideo_core::VideoEngine;

use super::video_path;
use crate::error::CliResult;
use crate::host::Host;
use crate::output::print_value;

/// Reads a property path relative to `video` and prints it.
pub fn run_get<E: VideoEngine + 'static>(host: &Host<E>, path: &str, json: bool) -> CliResult<()> {
    let value = host.read(&video_path(path))?;
    print_value(&value, json)
}
