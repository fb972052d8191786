/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Address tagged hexadecimal dump
use alloc::string::String;
use core::fmt::Write;

use crate::record::PifRecord;

const BYTES_PER_LINE: usize = 16;

/// Render `bytes` as a hexdump, 16 bytes per line
///
/// The first line holds the column indices `00`..`0F`, every other line
/// starts with the offset of its first byte. Offsets are at least two hex
/// digits wide and grow when the input needs more.
///
/// The last line carries the remaining `len % 16` bytes, so when the length
/// is a multiple of 16 it is only an offset.
///
/// ```text
///    00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F
/// 00 00 02 00 00 00 00 00 01 00 01 00 18 20 ff 00 00
/// 10 20 20 00 ...
/// ```
pub fn render_hexdump(bytes: &[u8]) -> String {
    let last_offset = bytes.len().saturating_sub(1) / BYTES_PER_LINE * BYTES_PER_LINE;
    let width = offset_digits(last_offset);

    let rows = bytes.len().div_ceil(BYTES_PER_LINE);
    // offset, 3 chars per byte and a newline, plus the column header
    let mut out = String::with_capacity((rows + 1) * (width + BYTES_PER_LINE * 3 + 1));

    out.push_str(&" ".repeat(width));
    for column in 0..BYTES_PER_LINE {
        let _ = write!(out, " {column:02X}");
    }
    out.push('\n');

    for (line, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        let _ = write!(out, "{:0width$x}", line * BYTES_PER_LINE);

        let shown = if line + 1 == rows {
            &chunk[..bytes.len() % BYTES_PER_LINE]
        } else {
            chunk
        };
        for byte in shown {
            let _ = write!(out, " {byte:02x}");
        }
        out.push('\n');
    }
    out
}

/// Hex digits needed to print `offset`, never less than two
fn offset_digits(offset: usize) -> usize {
    let bits = usize::BITS - offset.leading_zeros();
    (bits.div_ceil(4) as usize).max(2)
}

impl PifRecord {
    /// Hexdump of the serialized record, trailer included
    pub fn hexdump(&self) -> String {
        render_hexdump(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::{offset_digits, render_hexdump};
    use crate::PifRecord;

    #[test]
    fn offsets_are_two_digits_for_small_inputs() {
        assert_eq!(offset_digits(0), 2);
        assert_eq!(offset_digits(0xF0), 2);
        assert_eq!(offset_digits(0x100), 3);
        assert_eq!(offset_digits(0x1000), 4);
    }

    #[test]
    fn fifty_bytes_make_four_lines() {
        let bytes: Vec<u8> = (0..50).collect();
        let dump = render_hexdump(&bytes);
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "   00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F"
        );
        assert_eq!(
            lines[1],
            "00 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f"
        );
        let offsets: Vec<&str> = lines[1..]
            .iter()
            .map(|line| line.split(' ').next().unwrap())
            .collect();
        assert_eq!(offsets, ["00", "10", "20", "30"]);
        assert_eq!(lines[4], "30 30 31");
    }

    #[test]
    fn multiple_of_sixteen_ends_with_a_bare_offset() {
        let dump = render_hexdump(&[0xAB; 48]);
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].split(' ').count(), 17);
        assert_eq!(lines[3], "20");
    }

    #[test]
    fn wide_offsets_stay_aligned() {
        let dump = render_hexdump(&[0; 300]);
        let lines: Vec<&str> = dump.lines().collect();

        assert!(lines[0].starts_with("    00 01"));
        assert!(lines[1].starts_with("000 00"));
        assert!(lines[17].starts_with("100 00"));
        assert_eq!(lines.last().unwrap(), &"120 00 00 00 00 00 00 00 00 00 00 00 00");
    }

    #[test]
    fn record_dump_covers_the_trailer() {
        let mut bytes = vec![0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 24, 32, 1, 2, 3];
        bytes.extend_from_slice(&[b' '; 31]);
        bytes.extend_from_slice(&[0x2E, 0x00]);

        let record = PifRecord::parse(&bytes).unwrap();
        let dump = record.hexdump();

        assert_eq!(dump, render_hexdump(&bytes));

        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[3].ends_with(" 2e"));
        assert_eq!(lines[4], "30 00");
    }
}
