//! Command label extraction from `/proc/<pid>/cmdline`.

use std::fs;
use std::path::Path;

use super::ReadError;

/// Reads the command line of `pid` and turns it into a printable label.
pub fn read_command_label(proc_root: &Path, pid: u32) -> Result<String, ReadError> {
    let path = proc_root.join(pid.to_string()).join("cmdline");
    let content = fs::read(&path).map_err(|source| ReadError::Open {
        path: path.clone(),
        source,
    })?;
    Ok(sanitize_cmdline(&content))
}

/// Strips trailing NULs and joins the remaining arguments with single spaces.
///
/// Every internal NUL becomes one space, so empty arguments in the middle
/// show up as consecutive spaces.
pub fn sanitize_cmdline(raw: &[u8]) -> String {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let joined: Vec<u8> = raw[..end]
        .iter()
        .map(|&b| if b == 0 { b' ' } else { b })
        .collect();
    String::from_utf8_lossy(&joined).into_owned()
}
