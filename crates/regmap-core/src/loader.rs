//! Bulk register loading from configuration exports
//!
//! Chip vendors' configuration tools (CBPro and friends) emit
//! row-oriented `Address,Data` tables: a register index and the raw word
//! to write, one row per register, applied in file order. The contract
//! is exactly "write every row, in order" — no field interpretation, no
//! range validation, and no transactionality: a failure partway through
//! leaves prior writes applied and is reported to the caller.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{RegMapError, Result};
use crate::space::RegisterSpace;

/// Apply ordered `(byte_address, raw_word)` rows to a register space
///
/// # Errors
///
/// Propagates the first transport failure; rows already written stay
/// applied.
pub fn load_rows<S: RegisterSpace>(
    space: &mut S,
    rows: impl IntoIterator<Item = (u32, u32)>,
) -> Result<usize> {
    let mut written = 0usize;
    for (address, word) in rows {
        space.write32(address, word)?;
        written += 1;
    }
    debug!(rows = written, "bulk load applied");
    Ok(written)
}

/// Parse an `Address,Data` table into `(byte_address, raw_word)` rows
///
/// The `Address` column is a 32-bit register index and is shifted left
/// by 2 into a byte address, matching the export format. Values are
/// decimal or `0x`-prefixed hex. When the first non-blank row has a
/// non-numeric first column it is taken as the header and skipped; blank
/// lines are ignored.
///
/// # Errors
///
/// Returns `MalformedRow` with the 1-based line number for rows that are
/// not two parseable columns.
pub fn parse_table(text: &str) -> Result<Vec<(u32, u32)>> {
    let mut rows = Vec::new();
    let mut header_allowed = true;
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut columns = line.split(',').map(str::trim);
        let address = columns.next().unwrap_or("");

        let may_be_header = header_allowed;
        header_allowed = false;
        let Ok(index) = parse_word(address) else {
            if may_be_header {
                continue;
            }
            return Err(RegMapError::malformed_row(
                i + 1,
                format!("bad register index {address:?}"),
            ));
        };
        let Some(data) = columns.next() else {
            return Err(RegMapError::malformed_row(i + 1, "missing Data column"));
        };
        let word = parse_word(data)
            .map_err(|()| RegMapError::malformed_row(i + 1, format!("bad data word {data:?}")))?;

        rows.push((index << 2, word));
    }
    Ok(rows)
}

/// Read, parse, and apply a configuration export file
///
/// # Errors
///
/// Propagates I/O errors, `MalformedRow`, and transport failures. Rows
/// written before a transport failure stay applied.
pub fn load_file<S: RegisterSpace>(space: &mut S, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let rows = parse_table(&text)?;
    let written = load_rows(space, rows)?;
    info!(path = %path.display(), rows = written, "loaded configuration export");
    Ok(written)
}

fn parse_word(token: &str) -> std::result::Result<u32, ()> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|_| ())
    } else {
        token.parse::<u32>().map_err(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::MemSpace;

    #[test]
    fn parses_header_and_hex_rows() {
        let rows = parse_table("Address,Data\n0x0004,0x0A\n6,12\n").unwrap();
        assert_eq!(rows, vec![(0x0004 << 2, 0x0A), (6 << 2, 12)]);
    }

    #[test]
    fn blank_lines_ignored() {
        let rows = parse_table("0x01,0x02\n\n0x03,0x04\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn header_after_blank_line_skipped() {
        let rows = parse_table("\nAddress,Data\n0x01,0x02\n").unwrap();
        assert_eq!(rows, vec![(0x01 << 2, 0x02)]);
    }

    #[test]
    fn single_column_header_skipped() {
        let rows = parse_table("Address\n0x01,0x02\n").unwrap();
        assert_eq!(rows, vec![(0x01 << 2, 0x02)]);
    }

    #[test]
    fn bad_row_reports_line_number() {
        let err = parse_table("Address,Data\n0x01,0x02\nnonsense,0x03\n").unwrap_err();
        match err {
            RegMapError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_data_column_rejected() {
        let err = parse_table("0x01\n").unwrap_err();
        assert!(matches!(err, RegMapError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn rows_apply_in_order() {
        let mut space = MemSpace::new(0x100);
        let n = load_rows(&mut space, [(0x10, 0xAB), (0x14, 0xCD), (0x10, 0xEF)]).unwrap();
        assert_eq!(n, 3);
        // Last write wins at 0x10 — file order is the contract
        assert_eq!(space.read32(0x10).unwrap(), 0xEF);
        assert_eq!(space.read32(0x14).unwrap(), 0xCD);
    }

    #[test]
    fn partial_load_leaves_prior_writes() {
        let mut space = MemSpace::new(0x8);
        let err = load_rows(&mut space, [(0x0, 0x11), (0x4, 0x22), (0x100, 0x33)]).unwrap_err();
        assert!(matches!(err, RegMapError::AddressOutOfRange { .. }));
        assert_eq!(space.read32(0x0).unwrap(), 0x11);
        assert_eq!(space.read32(0x4).unwrap(), 0x22);
    }
}
