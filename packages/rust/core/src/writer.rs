//! Partial file persistence.
//!
//! Each partial is written to a temp file and renamed into place, so a
//! failed write never leaves a half-written partial behind. There is no
//! cross-file rollback: a partial that was already renamed stays on disk
//! even if a later write fails.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use partialgen_shared::{PartialgenError, Result};

/// Outcome of writing one partial file.
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    /// Final path of the partial.
    pub path: PathBuf,
    /// Bytes written.
    pub size_bytes: usize,
    /// Whether the content differs from what was previously on disk.
    pub changed: bool,
}

/// Write a partial file into the output directory, overwriting any
/// previous version.
pub fn write_partial(dir: &Path, file_name: &str, content: &str) -> Result<WriteOutcome> {
    std::fs::create_dir_all(dir).map_err(|e| PartialgenError::io(dir, e))?;

    let target = dir.join(file_name);
    let changed = match std::fs::read(&target) {
        Ok(existing) => content_hash(&existing) != content_hash(content.as_bytes()),
        Err(_) => true,
    };

    let temp = dir.join(format!(".{file_name}.tmp"));
    std::fs::write(&temp, content).map_err(|e| PartialgenError::io(&temp, e))?;
    std::fs::rename(&temp, &target).map_err(|e| PartialgenError::io(&target, e))?;

    if changed {
        info!(path = %target.display(), size = content.len(), "partial updated");
    } else {
        debug!(path = %target.display(), "partial unchanged");
    }

    Ok(WriteOutcome {
        path: target,
        size_bytes: content.len(),
        changed,
    })
}

/// SHA-256 hex digest of file content.
fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
