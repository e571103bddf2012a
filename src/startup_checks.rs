//! Startup requirement checks for swapview.
//!
//! Nothing here is fatal. Missing privileges only shrink the report.

use nix::unistd::geteuid;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Warns when the scan is likely to miss processes.
pub fn check_requirements(proc_root: &Path) {
    check_user_privileges();
    check_proc_mounted(proc_root);
}

/// Without root, smaps of other users' processes is unreadable and those
/// processes drop out of the report.
fn check_user_privileges() {
    if geteuid().is_root() {
        debug!("Running as root (uid=0)");
    } else {
        warn!("Not running as root - processes owned by other users will be missing");
    }
}

fn check_proc_mounted(proc_root: &Path) {
    match fs::metadata(proc_root.join("self")) {
        Ok(_) => debug!("{} looks like a live procfs", proc_root.display()),
        Err(_) => info!(
            "{} has no 'self' entry - reading a fixture tree or procfs is not mounted",
            proc_root.display()
        ),
    }
}
