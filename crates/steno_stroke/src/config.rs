use crate::error::{Result, StrokeError};
use crate::layout::{Layout, LayoutBuilder};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

/// Layout description as written in a TOML file.
///
/// ```toml
/// keys = ["#", "S-", "T-", "K-", "P-", "W-", "H-", "R-", "A-", "O-", "*",
///         "-E", "-U", "-F", "-R", "-P", "-B", "-L", "-G", "-T", "-S", "-D", "-Z"]
/// implicit_hyphen_keys = ["A-", "O-", "*", "-E", "-U"]
/// number_key = "#"
///
/// [numbers]
/// "S-" = "1-"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit_hyphen_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_key: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub numbers: BTreeMap<String, String>,
}

const ENGLISH_KEYS: [&str; 23] = [
    "#", "S-", "T-", "K-", "P-", "W-", "H-", "R-", "A-", "O-", "*", "-E", "-U", "-F", "-R", "-P",
    "-B", "-L", "-G", "-T", "-S", "-D", "-Z",
];
const ENGLISH_IMPLICIT_HYPHEN_KEYS: [&str; 5] = ["A-", "O-", "*", "-E", "-U"];
const ENGLISH_NUMBER_KEY: &str = "#";
const ENGLISH_NUMBERS: [(&str, &str); 10] = [
    ("S-", "1-"),
    ("T-", "2-"),
    ("P-", "3-"),
    ("H-", "4-"),
    ("A-", "5-"),
    ("O-", "0-"),
    ("-F", "-6"),
    ("-P", "-7"),
    ("-L", "-8"),
    ("-T", "-9"),
];

impl LayoutConfig {
    /// The standard English stenotype layout.
    pub fn english() -> Self {
        Self {
            keys: ENGLISH_KEYS.iter().map(|k| k.to_string()).collect(),
            implicit_hyphen_keys: Some(
                ENGLISH_IMPLICIT_HYPHEN_KEYS
                    .iter()
                    .map(|k| k.to_string())
                    .collect(),
            ),
            number_key: Some(ENGLISH_NUMBER_KEY.to_string()),
            numbers: ENGLISH_NUMBERS
                .iter()
                .map(|(k, d)| (k.to_string(), d.to_string()))
                .collect(),
        }
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read a layout file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading layout from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| StrokeError::ReadConfig {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content).map_err(|e| StrokeError::ParseConfig {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    pub fn builder(&self) -> LayoutBuilder {
        let mut builder = LayoutBuilder::new(&self.keys);
        if let Some(keys) = &self.implicit_hyphen_keys {
            builder = builder.implicit_hyphen_keys(keys);
        }
        if let Some(number_key) = &self.number_key {
            builder = builder.number_key(number_key);
        }
        builder.numbers(&self.numbers)
    }

    /// Validate the description and build the layout.
    pub fn build(&self) -> Result<Layout> {
        self.builder().build()
    }
}
