use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub tool: ToolSummary,
    pub source: String,
    pub files: Vec<ExportedFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    Combination,
    Country,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedFile {
    pub file: String,
    pub kind: ExportKind,
    pub rows: usize,
}

impl ExportManifest {
    pub fn new(source: &Path) -> Self {
        Self {
            tool: ToolSummary {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            source: source.to_string_lossy().to_string(),
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, file: impl Into<String>, kind: ExportKind, rows: usize) {
        self.files.push(ExportedFile {
            file: file.into(),
            kind,
            rows,
        });
    }

    pub fn count(&self, kind: ExportKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }
}

pub fn write_manifest(out_dir: &Path, manifest: &ExportManifest) -> Result<(), ManifestError> {
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(out_dir.join(MANIFEST_FILE), json)?;
    Ok(())
}
