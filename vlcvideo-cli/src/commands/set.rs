// vlcvideo-cli/src/commands/set.rs
//
// Implements `vlcvideo set PATH VALUE`. The value printed afterwards is read
// back from the engine, so clamping by the engine is visible.

use log::info;
use vlcvideo_core::VideoEngine;

use super::video_path;
use crate::error::CliResult;
use crate::host::Host;
use crate::output::print_value;
use crate::script::parse_literal;

pub fn run_set<E: VideoEngine + 'static>(
    host: &mut Host<E>,
    path: &str,
    value: &str,
    json: bool,
) -> CliResult<()> {
    let segments = video_path(path);
    let value = parse_literal(value);
    info!("Setting video.{} = {}", path, value);
    host.write(&segments, value)?;

    let read_back = host.read(&segments)?;
    print_value(&read_back, json)
}
