use serde::{Deserialize, Serialize};

/// Naming convention an SWC filename is checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilenameFormat {
    /// No filename check.
    #[default]
    None,
    Aind,
    Aibs,
}

impl FilenameFormat {
    /// Parse from string (matching the serde rename, case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "aind" => Some(Self::Aind),
            "aibs" => Some(Self::Aibs),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilenameConfig {
    pub format: FilenameFormat,
}
