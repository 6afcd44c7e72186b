use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::dims::defs::DimensionSet;

const DEFAULT_DIMENSIONS: &str = include_str!("../../assets/dimensions/cscc.toml");

#[derive(Debug, Error)]
pub enum DimsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no dimensions defined in {0}")]
    Empty(String),
    #[error("duplicate dimension key {key} in {origin}")]
    DuplicateKey { key: String, origin: String },
}

pub fn load_dimension_set(path: &Path) -> Result<DimensionSet, DimsError> {
    let text = fs::read_to_string(path)?;
    parse_dimension_set(&text, &path.to_string_lossy())
}

pub fn default_dimension_set() -> Result<DimensionSet, DimsError> {
    parse_dimension_set(DEFAULT_DIMENSIONS, "built-in cscc dimensions")
}

pub fn resolve_dimension_set(path: Option<&Path>) -> Result<DimensionSet, DimsError> {
    match path {
        Some(path) => load_dimension_set(path),
        None => default_dimension_set(),
    }
}

fn parse_dimension_set(text: &str, origin: &str) -> Result<DimensionSet, DimsError> {
    let set: DimensionSet = toml::from_str(text)?;
    if set.dimensions.is_empty() {
        return Err(DimsError::Empty(origin.to_string()));
    }
    let mut seen = HashSet::new();
    for key in set.keys() {
        if !seen.insert(key) {
            return Err(DimsError::DuplicateKey {
                key: key.to_string(),
                origin: origin.to_string(),
            });
        }
    }
    Ok(set)
}

#[cfg(test)]
#[path = "../../tests/src_inline/dims/loader.rs"]
mod tests;
