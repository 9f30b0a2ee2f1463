// vlcvideo-cli/src/commands/inspect.rs
//
// Implements `vlcvideo inspect`: one line per readable property, with nested
// objects (deinterlace) printed as their own section.

use log::debug;
use vlcvideo_core::{HostObject, HostValue, VideoEngine};

use crate::error::CliResult;
use crate::host::Host;
use crate::output::{print_heading, print_info, print_section, print_value_pretty};

pub fn run_inspect<E: VideoEngine + 'static>(host: &Host<E>, json: bool) -> CliResult<()> {
    let video = host.video()?;

    if json {
        return print_value_pretty(&HostValue::Object(video));
    }

    print_heading(&format!("{} properties", video.class_name()));
    let mut nested = Vec::new();
    for property in video.properties() {
        match video.get_property(property.name)? {
            HostValue::Object(object) => nested.push((property.name, object)),
            value => print_info(property.name, value),
        }
    }

    for (name, object) in nested {
        debug!("Inspecting nested {} object '{}'", object.class_name(), name);
        print_section(name);
        print_object(object.as_ref())?;
    }
    Ok(())
}

fn print_object(object: &dyn HostObject) -> CliResult<()> {
    for property in object.properties() {
        print_info(property.name, object.get_property(property.name)?);
    }
    if !object.methods().is_empty() {
        print_info("methods", object.methods().join(", "));
    }
    Ok(())
}
