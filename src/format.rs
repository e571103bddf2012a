//! Human-readable byte counts.

const UNITS: [char; 4] = ['K', 'M', 'G', 'T'];

/// Formats a byte count with binary units, e.g. `976.6KiB`.
///
/// A value only moves to the next unit once it exceeds 1100, so counts
/// between 1024 and 1100 stay in the smaller unit (`1024B`, not `1.0KiB`).
/// Anything past TiB keeps growing in TiB.
pub fn filesize(size: u64) -> String {
    let mut left = size as f64;
    let mut unit = 0;
    while left > 1100.0 && unit < UNITS.len() {
        left /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{}B", size)
    } else {
        format!("{:.1}{}iB", left, UNITS[unit - 1])
    }
}
