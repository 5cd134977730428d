use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Options controlling how arrays are rendered as text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PrintConfig {
    /// Digits after the decimal point.
    pub precision: usize,

    /// Entries kept at each end of an axis before eliding the middle.
    /// `None` prints every entry.
    pub edge_items: Option<usize>,

    pub notation: Notation,
}

/// Number format used for each element.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Fixed,
    Scientific,
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Notation::Fixed),
            "scientific" | "sci" => Ok(Notation::Scientific),
            _ => Err(format!(
                "Unknown notation: {}. Expected `fixed` or `scientific`",
                s
            )),
        }
    }
}

impl PrintConfig {
    pub fn new(precision: usize, edge_items: Option<usize>, notation: Notation) -> Self {
        Self {
            precision,
            edge_items,
            notation,
        }
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            edge_items: Some(3),
            notation: Notation::Fixed,
        }
    }
}

/// Load print options from a JSON file. Missing fields take their defaults.
pub fn load_print_config<P: AsRef<Path>>(path: P) -> Result<PrintConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: PrintConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
