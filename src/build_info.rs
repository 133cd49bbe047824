//! Version stamp baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for `--version` and the log header.
pub fn version_line() -> String {
    format!("flappy {} ({})", BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_shape() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
        // YYYY-MM-DD
        assert_eq!(BUILD_DATE.len(), 10);
    }

    #[test]
    fn test_version_line_mentions_both_parts() {
        let line = version_line();
        assert!(line.starts_with("flappy "));
        assert!(line.contains(BUILD_COMMIT));
        assert!(line.contains(BUILD_DATE));
    }
}
