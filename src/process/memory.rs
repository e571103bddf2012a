//! Swap usage parsing from `/proc/<pid>/smaps`.
//!
//! Each mapping block in smaps carries a `Swap:` line in kB. The per-process
//! total is the sum over all mappings.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::ReadError;

const SWAP_PREFIX: &[u8] = b"Swap:";

/// Reads the total swap usage of `pid` in bytes.
///
/// A process without any `Swap:` lines uses no swap and yields 0.
pub fn read_swap_size(proc_root: &Path, pid: u32) -> Result<u64, ReadError> {
    let path = proc_root.join(pid.to_string()).join("smaps");
    let file = fs::File::open(&path).map_err(|source| ReadError::Open {
        path: path.clone(),
        source,
    })?;

    let kb = parse_swap_kb(BufReader::new(file), &path)?;
    kb.checked_mul(1024).ok_or(ReadError::Overflow { path })
}

/// Sums every `Swap:` value (in kB) found in an smaps stream.
///
/// Lines are handled as bytes since mapping pathnames need not be UTF-8.
/// One malformed `Swap:` value, or a sum past `u64::MAX`, fails the whole
/// stream. `path` only labels
/// read errors.
pub fn parse_swap_kb<R: BufRead>(reader: R, path: &Path) -> Result<u64, ReadError> {
    let mut total_kb = 0u64;

    for line in reader.split(b'\n') {
        let line = line.map_err(|source| ReadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let Some(rest) = line.strip_prefix(SWAP_PREFIX) else {
            continue;
        };
        let rest = String::from_utf8_lossy(rest);
        total_kb = total_kb
            .checked_add(parse_swap_value(&rest)?)
            .ok_or_else(|| ReadError::Overflow {
                path: path.to_path_buf(),
            })?;
    }

    Ok(total_kb)
}

/// Parses the value part of a `Swap:` line, e.g. `"          128 kB"`.
pub fn parse_swap_value(v: &str) -> Result<u64, ReadError> {
    let number = v
        .trim_end()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .trim();
    number
        .parse()
        .map_err(|source| ReadError::InvalidSwapSize {
            line: v.trim().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SMAPS_BLOCK: &str = "\
55d4c0a00000-55d4c0a21000 r--p 00000000 fd:01 1835032    /usr/bin/bash
Size:                132 kB
KernelPageSize:        4 kB
Rss:                 128 kB
Pss:                  64 kB
Swap:                100 kB
SwapPss:             100 kB
Locked:                0 kB
7ffd3c1e5000-7ffd3c206000 rw-p 00000000 00:00 0          [stack]
Size:                132 kB
Rss:                  12 kB
Swap:                200 kB
SwapPss:             200 kB
";

    #[test]
    fn test_parse_swap_value() {
        assert_eq!(parse_swap_value("                100 kB").unwrap(), 100);
        assert_eq!(parse_swap_value(" 0 kB").unwrap(), 0);
        assert_eq!(parse_swap_value("42").unwrap(), 42);
        assert_eq!(parse_swap_value("\t7 kB\r").unwrap(), 7);
    }

    #[test]
    fn test_parse_swap_value_invalid() {
        assert!(parse_swap_value("").is_err());
        assert!(parse_swap_value("   kB").is_err());
        assert!(parse_swap_value("abc kB").is_err());
        assert!(parse_swap_value("-1 kB").is_err());
        assert!(parse_swap_value("1.5 kB").is_err());
    }

    #[test]
    fn test_parse_swap_kb_sums_mappings() {
        // SwapPss lines must not be counted
        assert_eq!(parse_swap_kb(Cursor::new(SMAPS_BLOCK), Path::new("smaps")).unwrap(), 300);
    }

    #[test]
    fn test_parse_swap_kb_no_swap_lines() {
        let input = "Size: 4 kB\nRss: 4 kB\n";
        assert_eq!(parse_swap_kb(Cursor::new(input), Path::new("smaps")).unwrap(), 0);
        assert_eq!(parse_swap_kb(Cursor::new(""), Path::new("smaps")).unwrap(), 0);
    }

    #[test]
    fn test_parse_swap_kb_malformed_fails_whole_read() {
        let input = "Swap: 100 kB\nSwap: lots kB\n";
        let err = parse_swap_kb(Cursor::new(input), Path::new("smaps")).unwrap_err();
        assert!(matches!(err, ReadError::InvalidSwapSize { .. }));
    }

    #[test]
    fn test_parse_swap_kb_non_utf8_pathname() {
        let mut input = b"7f00-7f01 r--p 00000000 00:00 0 /tmp/\xff\xfe\n".to_vec();
        input.extend_from_slice(b"Swap: 8 kB\n");
        assert_eq!(parse_swap_kb(Cursor::new(input), Path::new("smaps")).unwrap(), 8);
    }

    #[test]
    fn test_read_swap_size_in_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let pid_dir = dir.path().join("77");
        fs::create_dir(&pid_dir).unwrap();
        fs::write(pid_dir.join("smaps"), "Swap: 100 kB\nSwap: 200 kB\n").unwrap();

        assert_eq!(read_swap_size(dir.path(), 77).unwrap(), 307200);
    }

    #[test]
    fn test_parse_swap_kb_sum_overflow() {
        let input = format!("Swap: {} kB\nSwap: 1 kB\n", u64::MAX);
        let err = parse_swap_kb(Cursor::new(input), Path::new("smaps")).unwrap_err();
        assert!(matches!(err, ReadError::Overflow { .. }));
    }

    #[test]
    fn test_read_swap_size_bytes_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let pid_dir = dir.path().join("9");
        fs::create_dir(&pid_dir).unwrap();
        // Valid kB count, but times 1024 does not fit in u64
        fs::write(pid_dir.join("smaps"), "Swap: 18014398509481984 kB\n").unwrap();

        let err = read_swap_size(dir.path(), 9).unwrap_err();
        assert!(matches!(err, ReadError::Overflow { .. }));
    }

    #[test]
    fn test_read_swap_size_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_swap_size(dir.path(), 77).unwrap_err();
        assert!(matches!(err, ReadError::Open { .. }));
    }
}
