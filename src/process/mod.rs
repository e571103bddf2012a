//! Per-process readers for the /proc filesystem.
//!
//! This module provides:
//! - `cmdline`: Command label from /proc/<pid>/cmdline
//! - `memory`: Swap usage parsing from /proc/<pid>/smaps
//! - `scanner`: Process discovery

pub mod cmdline;
pub mod memory;
pub mod scanner;

use std::num::ParseIntError;
use std::path::PathBuf;

// Re-export commonly used types
pub use cmdline::{read_command_label, sanitize_cmdline};
pub use memory::{parse_swap_kb, parse_swap_value, read_swap_size};
pub use scanner::{list_candidate_pids, ScanError};

/// Failure to read one process. The caller skips the pid; it usually means
/// the process exited between enumeration and read.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("error opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid size in line {line:?}: {source}")]
    InvalidSwapSize {
        line: String,
        #[source]
        source: ParseIntError,
    },

    #[error("swap size of {} overflows u64", .path.display())]
    Overflow { path: PathBuf },
}
