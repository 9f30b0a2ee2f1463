// vlcvideo-cli/src/commands/run.rs
//
// Implements `vlcvideo run SCRIPT`. Each expression statement's value is
// printed on its own line; `-` reads the script from stdin.

use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use vlcvideo_core::VideoEngine;

use crate::error::{CliErrorContext, CliResult};
use crate::host::Host;
use crate::output::print_value;
use crate::script::run_script;

fn read_source(script: &Path) -> CliResult<String> {
    if script == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .cli_context("Failed to read script from stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(script)
            .cli_with_context(|| format!("Failed to read script '{}'", script.display()))
    }
}

pub fn run_file<E: VideoEngine + 'static>(
    host: &mut Host<E>,
    script: &Path,
    json: bool,
) -> CliResult<()> {
    let source = read_source(script)?;
    let evaluated = run_script(host, &source, |value| print_value(value, json))?;
    debug!("Script produced {} value(s)", evaluated);
    Ok(())
}
