use std::path::PathBuf;

/// Dungeon description read when no input is given.
pub const DEFAULT_INPUT: &str = "adventure.yaml";
/// Declarations artifact written when no header path is given.
pub const DEFAULT_HEADER: &str = "newdb.h";
/// Definitions artifact written when no source path is given.
pub const DEFAULT_SOURCE: &str = "newdb.c";

/// Destinations for the generated declarations and definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub header: PathBuf,
    pub source: PathBuf,
}

impl OutputPaths {
    pub fn new(header: impl Into<PathBuf>, source: impl Into<PathBuf>) -> Self {
        Self {
            header: header.into(),
            source: source.into(),
        }
    }

    /// File name the definitions artifact uses in its `#include` line.
    pub fn header_include(&self) -> String {
        self.header
            .file_name()
            .map_or_else(|| DEFAULT_HEADER.to_string(), |name| name.to_string_lossy().into_owned())
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER, DEFAULT_SOURCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_uses_file_name_only() {
        let paths = OutputPaths::new("build/generated/newdb.h", "build/generated/newdb.c");
        assert_eq!(paths.header_include(), "newdb.h");
        assert_eq!(OutputPaths::default().header_include(), DEFAULT_HEADER);
    }
}
