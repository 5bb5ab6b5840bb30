use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported supermarket chain. Each store has its own receipt layout
/// conventions, so the variant drives cropping anchors and row parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Store {
    Auchan,
    Lidl,
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Store::Auchan => write!(f, "Auchan"),
            Store::Lidl => write!(f, "Lidl"),
        }
    }
}

impl std::str::FromStr for Store {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auchan" => Ok(Store::Auchan),
            "lidl" => Ok(Store::Lidl),
            other => Err(format!("Unknown store: '{other}'")),
        }
    }
}
