/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Human readable view of the metadata fields
use alloc::string::String;
use core::fmt::{Display, Formatter};

use crate::record::{PifRecord, PifTimestamp};

/// Timestamp, initials and signature of a PIF file
///
/// Text fields are decoded one byte per character (latin-1), padding
/// included, so the signature is always 16 characters long.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PifMetadata {
    timestamp:       PifTimestamp,
    author_initials: String,
    signature:       String
}

impl PifMetadata {
    pub const fn timestamp(&self) -> PifTimestamp {
        self.timestamp
    }

    /// The two stored initials, the unused third byte is not included
    pub fn author_initials(&self) -> &str {
        &self.author_initials
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl Display for PifMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Date and Time: {}", self.timestamp)?;
        writeln!(f, "Author Initials: {}", self.author_initials)?;
        write!(f, "Signature: {}", self.signature)
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

impl PifRecord {
    /// Extract the metadata block
    ///
    /// Date fields are rendered as stored, out of range values
    /// such as month 13 are not rejected.
    pub fn metadata(&self) -> PifMetadata {
        let content = self.content();

        PifMetadata {
            timestamp:       content.timestamp(),
            author_initials: latin1(&content.author_initials()[..2]),
            signature:       latin1(self.footer().signature())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::PifRecord;

    fn record_with(date_and_time: [u8; 12], initials: [u8; 3], signature: &[u8; 16]) -> PifRecord {
        let mut bytes = vec![0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 24, 32];
        bytes.extend_from_slice(&initials);
        bytes.extend_from_slice(&date_and_time);
        bytes.extend_from_slice(signature);
        bytes.extend_from_slice(&[0x2E, 0x00]);

        PifRecord::parse(&bytes).unwrap()
    }

    #[test]
    fn timestamp_renders_without_padding() {
        let record = record_with(
            [7, 0, 4, 0, 0xE8, 0x07, 9, 0, 5, 0, 30, 0],
            *b"XY\0",
            b"AB              "
        );
        let metadata = record.metadata();

        assert_eq!(metadata.timestamp().to_string(), "2024/7/4, 9:5:30");
        assert_eq!(metadata.author_initials(), "XY");
        assert_eq!(metadata.signature(), "AB              ");
        assert_eq!(
            metadata.to_string(),
            "Date and Time: 2024/7/4, 9:5:30\nAuthor Initials: XY\nSignature: AB              "
        );
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let record = record_with(
            [13, 0, 0xFF, 0xFF, 0, 0, 99, 0, 0, 1, 61, 0],
            *b"  \0",
            &[b' '; 16]
        );

        assert_eq!(
            record.metadata().timestamp().to_string(),
            "0/13/65535, 99:256:61"
        );
    }

    #[test]
    fn high_bytes_map_to_latin1() {
        let record = record_with([0; 12], [0xE9, b'a', 0], b"\xC5ngstr\xF6m        ");
        let metadata = record.metadata();

        assert_eq!(metadata.author_initials(), "éa");
        assert_eq!(metadata.signature(), "Ångström        ");
    }
}
