/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In memory representation of a PIF file
//!
//! A file is made of three sections, a header, the content and a footer.
//! All of them are plain values, once built they are never modified.
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};

use crate::constants::{
    PIF_BITS_PER_PIXEL, PIF_COLOR_MAP_TYPE, PIF_DATE_TIME_SIZE, PIF_DESCRIPTOR, PIF_HEADER_SIZE,
    PIF_IMAGE_TYPE, PIF_INITIALS_SIZE, PIF_SIGNATURE_SIZE, PIF_TAIL_SIZE
};

/// The 13 byte header of a PIF file
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PifHeader {
    color_map_type:          u8,
    image_type:              u8,
    color_map_specification: [u8; 5],
    image_specification:     [u8; 6]
}

impl PifHeader {
    /// Create the header describing a `width` by `height` image
    pub(crate) const fn new(width: u16, height: u16) -> PifHeader {
        let [width_lo, width_hi] = width.to_le_bytes();
        let [height_lo, height_hi] = height.to_le_bytes();

        PifHeader {
            color_map_type:          PIF_COLOR_MAP_TYPE,
            image_type:              PIF_IMAGE_TYPE,
            color_map_specification: [0; 5],
            image_specification:     [
                width_lo,
                width_hi,
                height_lo,
                height_hi,
                PIF_BITS_PER_PIXEL,
                PIF_DESCRIPTOR
            ]
        }
    }

    pub(crate) fn from_bytes(bytes: &[u8; PIF_HEADER_SIZE]) -> PifHeader {
        let mut color_map_specification = [0; 5];
        let mut image_specification = [0; 6];

        color_map_specification.copy_from_slice(&bytes[2..7]);
        image_specification.copy_from_slice(&bytes[7..13]);

        PifHeader {
            color_map_type: bytes[0],
            image_type: bytes[1],
            color_map_specification,
            image_specification
        }
    }

    /// Header bytes in file order
    pub fn to_bytes(&self) -> [u8; PIF_HEADER_SIZE] {
        let mut bytes = [0; PIF_HEADER_SIZE];

        bytes[0] = self.color_map_type;
        bytes[1] = self.image_type;
        bytes[2..7].copy_from_slice(&self.color_map_specification);
        bytes[7..13].copy_from_slice(&self.image_specification);

        bytes
    }

    pub const fn color_map_type(&self) -> u8 {
        self.color_map_type
    }

    pub const fn image_type(&self) -> u8 {
        self.image_type
    }

    pub const fn color_map_specification(&self) -> &[u8; 5] {
        &self.color_map_specification
    }

    /// Width low, width high, height low, height high, bits per pixel
    /// and descriptor bytes
    pub const fn image_specification(&self) -> &[u8; 6] {
        &self.image_specification
    }

    /// Image width, stored as a little endian 16 bit value
    pub fn width(&self) -> usize {
        usize::from(u16::from_le_bytes([
            self.image_specification[0],
            self.image_specification[1]
        ]))
    }

    /// Image height, stored as a little endian 16 bit value
    pub fn height(&self) -> usize {
        usize::from(u16::from_le_bytes([
            self.image_specification[2],
            self.image_specification[3]
        ]))
    }

    /// Check that the constant header fields carry their fixed values
    ///
    /// # Returns
    /// - `Ok(())`: Every constant matches
    /// - `Err(&str)`: Name of the first field that differs
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.color_map_type != PIF_COLOR_MAP_TYPE {
            return Err("color map type is not 0");
        }
        if self.image_type != PIF_IMAGE_TYPE {
            return Err("image type is not 2");
        }
        if self.color_map_specification != [0; 5] {
            return Err("color map specification is not zeroed");
        }
        if self.image_specification[4] != PIF_BITS_PER_PIXEL {
            return Err("bits per pixel is not 24");
        }
        if self.image_specification[5] != PIF_DESCRIPTOR {
            return Err("image descriptor is not 32");
        }
        Ok(())
    }
}

/// Creation date and time of a PIF file
///
/// Fields are kept as the 16 bit values stored on disk, no calendar
/// validation is done in either direction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PifTimestamp {
    pub year:   u16,
    pub month:  u16,
    pub day:    u16,
    pub hour:   u16,
    pub minute: u16,
    pub second: u16
}

impl PifTimestamp {
    pub const fn new(
        year: u16, month: u16, day: u16, hour: u16, minute: u16, second: u16
    ) -> PifTimestamp {
        PifTimestamp {
            year,
            month,
            day,
            hour,
            minute,
            second
        }
    }

    /// Fields in the order they are laid out on disk
    const fn fields(&self) -> [u16; 6] {
        [
            self.month,
            self.day,
            self.year,
            self.hour,
            self.minute,
            self.second
        ]
    }

    pub(crate) fn to_bytes(self) -> [u8; PIF_DATE_TIME_SIZE] {
        let mut bytes = [0; PIF_DATE_TIME_SIZE];

        for (slot, field) in bytes.chunks_exact_mut(2).zip(self.fields()) {
            slot.copy_from_slice(&field.to_le_bytes());
        }
        bytes
    }

    pub(crate) fn from_bytes(bytes: &[u8; PIF_DATE_TIME_SIZE]) -> PifTimestamp {
        let mut fields = [0_u16; 6];

        for (field, slot) in fields.iter_mut().zip(bytes.chunks_exact(2)) {
            *field = (u16::from(slot[1]) << 8) | u16::from(slot[0]);
        }
        let [month, day, year, hour, minute, second] = fields;

        PifTimestamp::new(year, month, day, hour, minute, second)
    }
}

impl Display for PifTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}/{}/{}, {}:{}:{}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Pixel payload and fixed metadata fields
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PifContent {
    image:           Vec<u8>,
    author_initials: [u8; PIF_INITIALS_SIZE],
    date_and_time:   [u8; PIF_DATE_TIME_SIZE]
}

impl PifContent {
    pub(crate) fn new(
        image: Vec<u8>, author_initials: [u8; PIF_INITIALS_SIZE],
        date_and_time: [u8; PIF_DATE_TIME_SIZE]
    ) -> PifContent {
        PifContent {
            image,
            author_initials,
            date_and_time
        }
    }

    /// Pixels as B,G,R triplets in row-major order
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    /// Raw initials bytes, the last byte is always zero for files
    /// produced by [`PifEncoder`](crate::PifEncoder)
    pub const fn author_initials(&self) -> &[u8; PIF_INITIALS_SIZE] {
        &self.author_initials
    }

    pub const fn date_and_time(&self) -> &[u8; PIF_DATE_TIME_SIZE] {
        &self.date_and_time
    }

    /// Decoded date and time fields
    pub fn timestamp(&self) -> PifTimestamp {
        PifTimestamp::from_bytes(&self.date_and_time)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PifFooter {
    signature: [u8; PIF_SIGNATURE_SIZE]
}

impl PifFooter {
    pub(crate) const fn new(signature: [u8; PIF_SIGNATURE_SIZE]) -> PifFooter {
        PifFooter { signature }
    }

    /// Space padded signature bytes
    pub const fn signature(&self) -> &[u8; PIF_SIGNATURE_SIZE] {
        &self.signature
    }
}

/// A complete PIF file
///
/// Built either by [`PifEncoder::build_record`](crate::PifEncoder::build_record)
/// or by parsing bytes with [`PifRecord::parse`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PifRecord {
    header:  PifHeader,
    content: PifContent,
    footer:  PifFooter
}

impl PifRecord {
    pub(crate) fn new(header: PifHeader, content: PifContent, footer: PifFooter) -> PifRecord {
        PifRecord {
            header,
            content,
            footer
        }
    }

    pub const fn header(&self) -> &PifHeader {
        &self.header
    }

    pub const fn content(&self) -> &PifContent {
        &self.content
    }

    pub const fn footer(&self) -> &PifFooter {
        &self.footer
    }

    /// Width and height declared in the header
    ///
    /// These are not checked against the image payload, see
    /// [`to_raster`](Self::to_raster) for that.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.header.width(), self.header.height())
    }

    /// Number of bytes [`serialize`](Self::serialize) produces
    pub fn serialized_size(&self) -> usize {
        PIF_HEADER_SIZE + self.content.image.len() + PIF_TAIL_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::{PifHeader, PifTimestamp};

    #[test]
    fn header_round_trips_and_validates() {
        let header = PifHeader::new(300, 2);
        let bytes = header.to_bytes();

        assert_eq!(bytes, [0, 2, 0, 0, 0, 0, 0, 0x2C, 0x01, 2, 0, 24, 32]);
        assert_eq!(PifHeader::from_bytes(&bytes), header);
        assert_eq!((header.width(), header.height()), (300, 2));
        assert!(header.validate().is_ok());
    }

    #[test]
    fn first_bad_constant_is_named() {
        let mut bytes = PifHeader::new(1, 1).to_bytes();
        bytes[4] = 1;
        bytes[11] = 32;

        assert_eq!(
            PifHeader::from_bytes(&bytes).validate(),
            Err("color map specification is not zeroed")
        );
    }

    #[test]
    fn timestamp_is_stored_month_first() {
        let timestamp = PifTimestamp::new(2024, 7, 4, 9, 5, 30);
        let bytes = timestamp.to_bytes();

        assert_eq!(bytes, [7, 0, 4, 0, 0xE8, 0x07, 9, 0, 5, 0, 30, 0]);
        assert_eq!(PifTimestamp::from_bytes(&bytes), timestamp);
        assert_eq!(PifTimestamp::default().to_bytes(), [0; 12]);
    }
}
