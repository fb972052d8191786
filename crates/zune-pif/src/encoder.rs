/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PIF encoder
use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteIoError, ZByteWriterTrait, ZWriter};
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_core::options::EncoderOptions;

use crate::constants::{
    PIF_BYTES_PER_PIXEL, PIF_HEADER_SIZE, PIF_INITIALS_SIZE, PIF_PAD_BYTE, PIF_SIGNATURE_SIZE,
    PIF_TAIL_SIZE, PIF_TRAILER
};
use crate::errors::PifEncodeErrors;
use crate::record::{PifContent, PifFooter, PifHeader, PifRecord, PifTimestamp};

/// A PIF encoder
///
/// Data is expected to be 8 bit, interleaved according to the colorspace
/// in `options`. Alpha channels are dropped, PIF only stores B,G,R.
///
/// Author initials, signature and timestamp default to spaces and zeroes
/// and should be set before calling [`encode`](Self::encode).
///
/// `EncoderOptions` cannot describe an image with no rows, use
/// [`new_with_dimensions`](Self::new_with_dimensions) for those.
///
/// # Example
/// - Encode a 10x10 red image
///
/// ```
/// use zune_core::bit_depth::BitDepth;
/// use zune_core::colorspace::ColorSpace;
/// use zune_core::options::EncoderOptions;
/// use zune_pif::{PifEncoder, PifTimestamp};
///
/// let pixels = [255, 0, 0].repeat(100);
/// let options = EncoderOptions::new(10, 10, ColorSpace::RGB, BitDepth::Eight);
///
/// let mut encoder = PifEncoder::new(&pixels, options);
/// encoder.set_author_initials("CE");
/// encoder.set_signature("zune");
/// encoder.set_timestamp(PifTimestamp::new(2024, 7, 4, 9, 5, 30));
///
/// let mut sink = vec![];
/// let written = encoder.encode(&mut sink).unwrap();
/// assert_eq!(written, 46 + 10 * 10 * 3);
/// ```
pub struct PifEncoder<'a> {
    data:            &'a [u8],
    width:           usize,
    height:          usize,
    colorspace:      ColorSpace,
    depth:           BitDepth,
    author_initials: [u8; PIF_INITIALS_SIZE],
    signature:       [u8; PIF_SIGNATURE_SIZE],
    timestamp:       PifTimestamp
}

impl<'a> PifEncoder<'a> {
    /// Create a new encoder context that can encode
    /// the provided data
    ///
    /// # Arguments
    ///  - `data`: Data to encode
    ///  - `options`: Contains metadata for data, including width and height
    ///
    /// # Panics
    /// If the height in `options` is zero, see [`new_with_dimensions`](Self::new_with_dimensions)
    pub fn new(data: &'a [u8], options: EncoderOptions) -> PifEncoder<'a> {
        PifEncoder {
            data,
            width: options.width(),
            height: options.height(),
            colorspace: options.colorspace(),
            depth: options.depth(),
            author_initials: encode_initials(""),
            signature: encode_signature(""),
            timestamp: PifTimestamp::default()
        }
    }

    /// Create an encoder for 8 bit `data` of the given dimensions
    ///
    /// Unlike [`new`](Self::new) this accepts a zero width or height,
    /// which encodes to a file with an empty image payload.
    pub fn new_with_dimensions(
        data: &'a [u8], width: usize, height: usize, colorspace: ColorSpace
    ) -> PifEncoder<'a> {
        PifEncoder {
            data,
            width,
            height,
            colorspace,
            depth: BitDepth::Eight,
            author_initials: encode_initials(""),
            signature: encode_signature(""),
            timestamp: PifTimestamp::default()
        }
    }

    /// Set the author initials
    ///
    /// Only the first two characters are stored, shorter text is
    /// padded with spaces. The third byte of the field is always zero.
    pub fn set_author_initials(&mut self, initials: &str) {
        self.author_initials = encode_initials(initials);
    }

    /// Set the signature
    ///
    /// Only the first 16 characters are stored, shorter text is padded
    /// with spaces.
    pub fn set_signature(&mut self, signature: &str) {
        self.signature = encode_signature(signature);
    }

    /// Set the creation date and time written to the file
    pub fn set_timestamp(&mut self, timestamp: PifTimestamp) {
        self.timestamp = timestamp;
    }

    /// Exact number of bytes the encoder will write
    ///
    /// Returns `None` if the calculation overflows a usize
    pub fn expected_buffer_size(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(PIF_BYTES_PER_PIXEL)?
            .checked_add(PIF_HEADER_SIZE + PIF_TAIL_SIZE)
    }

    /// Build the in memory representation of the file without
    /// serializing it
    pub fn build_record(&self) -> Result<PifRecord, PifEncodeErrors> {
        let (width, height) = (self.width, self.height);

        let (pif_width, pif_height) = match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(PifEncodeErrors::UnsupportedRaster(width, height))
        };
        if self.depth != BitDepth::Eight {
            return Err(PifEncodeErrors::UnsupportedBitDepth(self.depth));
        }
        let colorspace = self.colorspace;

        let order = bgr_order(colorspace)
            .ok_or(PifEncodeErrors::UnsupportedColorspace(colorspace))?;

        let components = colorspace.num_components();
        // both fit in 16 bits so this cannot overflow a usize
        let pixels = width * height;
        let expected = pixels * components;
        let found = self.data.len();

        if expected != found {
            return Err(PifEncodeErrors::WrongInputSize(expected, found));
        }

        let mut image = vec![0_u8; pixels * PIF_BYTES_PER_PIXEL];

        for (pixel, out) in self
            .data
            .chunks_exact(components)
            .zip(image.chunks_exact_mut(PIF_BYTES_PER_PIXEL))
        {
            out[0] = pixel[order[0]];
            out[1] = pixel[order[1]];
            out[2] = pixel[order[2]];
        }
        trace!("Width: {}", width);
        trace!("Height: {}", height);
        trace!("Input colorspace: {:?}", colorspace);

        let header = PifHeader::new(pif_width, pif_height);
        let content = PifContent::new(image, self.author_initials, self.timestamp.to_bytes());
        let footer = PifFooter::new(self.signature);

        Ok(PifRecord::new(header, content, footer))
    }

    /// Encode into a sink
    ///
    /// # Returns
    /// - Ok(usize): The number of bytes written into `sink`
    /// - Err(PifEncodeErrors): An error if something occurred
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, PifEncodeErrors> {
        let record = self.build_record()?;

        let mut writer = ZWriter::new(sink);
        writer.reserve(record.serialized_size())?;

        record.write_to(&mut writer)?;

        Ok(writer.bytes_written())
    }
}

impl PifRecord {
    /// Call `sink` with every section of the file in order,
    /// the trailer included
    fn write_sections<E, F>(&self, mut sink: F) -> Result<(), E>
    where
        F: FnMut(&[u8]) -> Result<(), E>
    {
        sink(&self.header().to_bytes())?;
        sink(self.content().image())?;
        sink(self.content().author_initials())?;
        sink(self.content().date_and_time())?;
        sink(self.footer().signature())?;
        sink(&PIF_TRAILER)
    }

    /// Write the record, trailer included, into `writer`
    pub fn write_to<T: ZByteWriterTrait>(
        &self, writer: &mut ZWriter<T>
    ) -> Result<(), ZByteIoError> {
        self.write_sections(|bytes| writer.write_all(bytes))
    }

    /// Flatten the record into the bytes of a PIF file
    ///
    /// The output is always `46 + image.len()` bytes long
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_size());

        let _ = self.write_sections::<Infallible, _>(|bytes| {
            out.extend_from_slice(bytes);
            Ok(())
        });
        out
    }
}

/// Indices of blue, green and red inside one input pixel
const fn bgr_order(colorspace: ColorSpace) -> Option<[usize; 3]> {
    match colorspace {
        ColorSpace::RGB | ColorSpace::RGBA => Some([2, 1, 0]),
        ColorSpace::BGR | ColorSpace::BGRA => Some([0, 1, 2]),
        ColorSpace::ARGB => Some([3, 2, 1]),
        ColorSpace::Luma | ColorSpace::LumaA => Some([0, 0, 0]),
        _ => None
    }
}

/// Map a character to one byte, characters outside latin-1 become `?`
fn single_byte(c: char) -> u8 {
    u8::try_from(u32::from(c)).unwrap_or(b'?')
}

pub(crate) fn encode_initials(initials: &str) -> [u8; PIF_INITIALS_SIZE] {
    let mut chars = initials.chars();
    let mut out = [0; PIF_INITIALS_SIZE];

    // last byte is left zero
    for byte in out.iter_mut().take(PIF_INITIALS_SIZE - 1) {
        *byte = chars.next().map_or(PIF_PAD_BYTE, single_byte);
    }
    out
}

pub(crate) fn encode_signature(signature: &str) -> [u8; PIF_SIGNATURE_SIZE] {
    let mut chars = signature.chars();
    let mut out = [PIF_PAD_BYTE; PIF_SIGNATURE_SIZE];

    for byte in out.iter_mut() {
        match chars.next() {
            Some(c) => *byte = single_byte(c),
            None => break
        }
    }
    out
}
