/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_pif::PifMetadata;

/// Metadata of a PIF file tagged with the path it came from
pub struct Metadata<'a> {
    file:       &'a Path,
    dimensions: (usize, usize),
    metadata:   &'a PifMetadata
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a Path, dimensions: (usize, usize), metadata: &'a PifMetadata) -> Metadata<'a> {
        Metadata {
            file,
            dimensions,
            metadata
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PifMetadata", 4)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("width", &self.dimensions.0)?;
        state.serialize_field("height", &self.dimensions.1)?;
        state.serialize_field("metadata", &self.metadata)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use zune_pif::PifRecord;

    use super::Metadata;

    #[test]
    fn json_carries_file_and_fields() {
        let mut bytes = vec![0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 24, 32];
        bytes.extend_from_slice(b"CE\0");
        bytes.extend_from_slice(&[7, 0, 4, 0, 0xE8, 0x07, 9, 0, 5, 0, 30, 0]);
        bytes.extend_from_slice(b"hello           ");
        bytes.extend_from_slice(&[0x2E, 0x00]);

        let record = PifRecord::parse(&bytes).unwrap();
        let metadata = record.metadata();
        let json = serde_json::to_value(Metadata::new(
            Path::new("a.pif"),
            record.dimensions(),
            &metadata
        ))
        .unwrap();

        assert_eq!(json["file"], "a.pif");
        assert_eq!(json["width"], 0);
        assert_eq!(json["metadata"]["author_initials"], "CE");
        assert_eq!(json["metadata"]["signature"], "hello           ");
        assert_eq!(json["metadata"]["timestamp"]["year"], 2024);
        assert_eq!(json["metadata"]["timestamp"]["second"], 30);
    }
}
