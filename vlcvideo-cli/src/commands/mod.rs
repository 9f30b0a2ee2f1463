//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command. All of
//! them operate on a [`Host`](crate::host::Host) whose `video` global is
//! already bound.

/// Prints every readable property of the video object.
pub mod inspect;
pub mod get;
pub mod set;
/// Evaluates script files or stdin line by line.
pub mod run;

/// Splits a property path relative to the video object into host segments.
pub(crate) fn video_path(path: &str) -> Vec<String> {
    std::iter::once("video")
        .chain(path.split('.').map(str::trim))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::video_path;

    #[test]
    fn test_video_path_prefixes_global() {
        assert_eq!(video_path("contrast"), vec!["video", "contrast"]);
        assert_eq!(
            video_path("deinterlace.mode"),
            vec!["video", "deinterlace", "mode"]
        );
    }
}
