use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub key: String,
    pub column: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DimensionSet {
    #[serde(default, rename = "dimension")]
    pub dimensions: Vec<Dimension>,
}

impl DimensionSet {
    pub fn n_combinations(&self) -> usize {
        self.dimensions.iter().map(|d| d.values.len()).product()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.dimensions.iter().map(|d| d.key.as_str())
    }
}
