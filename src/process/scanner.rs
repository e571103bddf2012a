//! Process discovery in the /proc filesystem.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// The process listing directory could not be opened. Nothing can be
/// reported without it.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("error opening {}", .path.display())]
    ProcUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lists every entry of `proc_root` whose name is a numeric pid.
pub fn list_candidate_pids(proc_root: &Path) -> Result<Vec<u32>, ScanError> {
    let entries = fs::read_dir(proc_root).map_err(|source| ScanError::ProcUnreadable {
        path: proc_root.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                trace!("Ignoring unreadable entry in {}: {}", proc_root.display(), e);
                continue;
            }
        };
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        match parse_pid(name) {
            Some(pid) => out.push(pid),
            None => trace!("Ignoring non-process entry {:?}", name),
        }
    }
    Ok(out)
}

/// Accepts only names made entirely of ASCII digits.
fn parse_pid(name: &str) -> Option<u32> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}
