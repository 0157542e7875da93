use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::GriplineResult;

/// Caller-supplied identifier distinguishing one run's outputs from another's.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct RunId(pub u64);

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// `<dir>/<stem>-<run>.<extension>`, the run zero-padded to four digits.
pub fn render_output_path(dir: &Path, stem: &str, run: RunId, extension: &str) -> PathBuf {
    let ext = extension.trim_start_matches('.');
    if ext.is_empty() {
        return dir.join(format!("{stem}-{run}"));
    }
    dir.join(format!("{stem}-{run}.{ext}"))
}

pub fn ensure_parent_dir(path: &Path) -> GriplineResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/output.rs"]
mod tests;
