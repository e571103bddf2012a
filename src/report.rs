//! Swap report: collects one record per readable process, sorts by swap
//! size and renders the table with a grand total.

use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, trace};

use crate::format::filesize;
use crate::process::{list_candidate_pids, read_command_label, read_swap_size, ScanError};

/// Swap usage of a single process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapInfo {
    pub pid: u32,
    pub comm: String,
    /// Always a multiple of 1024.
    pub size: u64,
}

/// Reads a `SwapInfo` for every process under `proc_root`.
///
/// Processes that vanish mid-scan or report a malformed swap value are
/// left out. Only an unreadable `proc_root` is an error.
pub fn collect_swap_info(proc_root: &Path) -> Result<Vec<SwapInfo>, ScanError> {
    let pids = list_candidate_pids(proc_root)?;
    let candidates = pids.len();

    let mut out = Vec::with_capacity(candidates);
    for pid in pids {
        let comm = match read_command_label(proc_root, pid) {
            Ok(c) => c,
            Err(e) => {
                trace!("Skipping pid {}: {}", pid, e);
                continue;
            }
        };
        let size = match read_swap_size(proc_root, pid) {
            Ok(s) => s,
            Err(e) => {
                trace!("Skipping pid {}: {}", pid, e);
                continue;
            }
        };
        out.push(SwapInfo { pid, comm, size });
    }

    debug!(
        "Scanned {} candidate processes, {} readable, {} skipped",
        candidates,
        out.len(),
        candidates - out.len()
    );
    Ok(out)
}

/// Sorts ascending by swap size. Ties keep no particular order.
pub fn sort_by_swap(list: &mut [SwapInfo]) {
    list.sort_unstable_by_key(|info| info.size);
}

/// Writes the report table for an already sorted list.
///
/// Zero-swap processes are hidden. Returns the total of the printed rows,
/// saturating at `u64::MAX`.
pub fn write_report<W: Write>(out: &mut W, list: &[SwapInfo]) -> io::Result<u64> {
    let mut total = 0u64;

    writeln!(out, "{:>7} {:>9} {}", "PID", "SWAP", "COMMAND")?;
    for info in list.iter().filter(|info| info.size != 0) {
        writeln!(out, "{:>7} {:>9} {}", info.pid, filesize(info.size), info.comm)?;
        total = total.saturating_add(info.size);
    }
    writeln!(out, "Total: {:>10}", filesize(total))?;

    Ok(total)
}

/// Error from a full report run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Scans `proc_root` and writes the sorted report to `out`.
pub fn run<W: Write>(proc_root: &Path, out: &mut W) -> Result<u64, ReportError> {
    let mut list = collect_swap_info(proc_root)?;
    sort_by_swap(&mut list);
    let total = write_report(out, &list)?;
    out.flush()?;
    Ok(total)
}
