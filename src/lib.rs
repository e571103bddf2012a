//! swapview library
//!
//! Reports per-process swap usage by scanning a procfs tree. All reads take
//! the proc root explicitly, so the same code runs against `/proc` or a
//! fixture directory.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let mut stdout = std::io::stdout().lock();
//! let total = swapview::report::run(Path::new("/proc"), &mut stdout)?;
//! eprintln!("{} bytes in swap", total);
//! # Ok::<(), swapview::report::ReportError>(())
//! ```

pub mod format;
pub mod process;
pub mod report;
pub mod startup_checks;

// Re-export main types for convenience
pub use format::filesize;
pub use report::{collect_swap_info, run, write_report, ReportError, SwapInfo};
