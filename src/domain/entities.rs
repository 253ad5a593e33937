//! Value types shared across layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// File extension of persisted entry trees.
pub const ENTRY_FILE_EXTENSION: &str = "json";

/// How directory listings are matched against entry files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Any file name ending in `json`, dot or not (`myjson` matches)
    #[default]
    Suffix,
    /// Only a real `.json` extension
    Extension,
}

impl MatchMode {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            MatchMode::Suffix => file_name.ends_with(ENTRY_FILE_EXTENSION),
            MatchMode::Extension => file_name
                .rsplit_once('.')
                .is_some_and(|(stem, ext)| !stem.is_empty() && ext == ENTRY_FILE_EXTENSION),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Suffix => write!(f, "suffix"),
            MatchMode::Extension => write!(f, "extension"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "suffix" => Ok(MatchMode::Suffix),
            "extension" => Ok(MatchMode::Extension),
            other => Err(format!("unknown match mode: {other}")),
        }
    }
}

/// What a collection load does when one file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// First failure aborts the load
    #[default]
    FailFast,
    /// Failures are recorded and the file is skipped
    BestEffort,
}

/// Expand `~`, `$VAR` and `${VAR}`; returns the input unchanged on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Fruit.json", true, true)]
    #[case("myjson", true, false)]
    #[case("Fruit.JSON", false, false)]
    #[case("notes.txt", false, false)]
    #[case(".json", true, false)]
    #[case("archive.json.bak", false, false)]
    fn given_file_name_when_matching_then_mode_decides(
        #[case] name: &str,
        #[case] suffix: bool,
        #[case] extension: bool,
    ) {
        assert_eq!(MatchMode::Suffix.matches(name), suffix);
        assert_eq!(MatchMode::Extension.matches(name), extension);
    }

    #[test]
    fn given_mode_string_when_parsing_then_case_insensitive() {
        assert_eq!("Extension".parse::<MatchMode>(), Ok(MatchMode::Extension));
        assert_eq!("suffix".parse::<MatchMode>(), Ok(MatchMode::Suffix));
        assert!("glob".parse::<MatchMode>().is_err());
    }
}
