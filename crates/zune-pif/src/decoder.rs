/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};

use crate::constants::{
    PIF_BYTES_PER_PIXEL, PIF_DATE_TIME_SIZE, PIF_HEADER_SIZE, PIF_INITIALS_SIZE, PIF_MIN_SIZE,
    PIF_SIGNATURE_SIZE, PIF_TAIL_SIZE
};
use crate::errors::PifDecodeErrors;
use crate::metadata::PifMetadata;
use crate::record::{PifContent, PifFooter, PifHeader, PifRecord};

const PIF_OUTPUT_COLORSPACE: ColorSpace = ColorSpace::RGBA;
const PIF_READ_CHUNK: usize = 4096;

/// Options that influence how a [`PifDecoder`] behaves
#[derive(Copy, Clone, Debug)]
pub struct PifDecoderOptions {
    max_width:   usize,
    max_height:  usize,
    strict_mode: bool
}

impl PifDecoderOptions {
    /// Refuse images wider than `width`
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    /// Refuse images taller than `height`
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    /// Treat unexpected values in the constant header fields as errors
    /// instead of warnings
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    pub const fn max_height(&self) -> usize {
        self.max_height
    }
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }
}

impl Default for PifDecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 16,
            max_height:  1 << 16,
            strict_mode: false
        }
    }
}

/// A PIF decoder
///
/// The image payload length is only known from the total file size,
/// so the decoder reads the whole source when it decodes headers.
///
/// # Example
/// ```
/// use zune_core::bytestream::ZCursor;
/// use zune_pif::PifDecoder;
///
/// // 1x1 image, a single blue pixel
/// let mut file = vec![0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 24, 32, 255, 0, 0];
/// file.extend_from_slice(&[b' '; 33]);
///
/// let mut decoder = PifDecoder::new(ZCursor::new(&file));
/// let pixels = decoder.decode().unwrap();
/// assert_eq!(pixels, [0, 0, 255, 255]);
/// ```
pub struct PifDecoder<T: ZByteReaderTrait> {
    stream:  ZReader<T>,
    options: PifDecoderOptions,
    record:  Option<PifRecord>
}

impl<T> PifDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new PIF decoder with default options
    pub fn new(data: T) -> PifDecoder<T> {
        Self::new_with_options(data, PifDecoderOptions::default())
    }

    /// Create a new PIF decoder that obeys the specified restrictions
    pub fn new_with_options(data: T, options: PifDecoderOptions) -> PifDecoder<T> {
        PifDecoder {
            stream: ZReader::new(data),
            options,
            record: None
        }
    }

    /// Read the file and check its header against the decoder options
    ///
    /// Calling this more than once does nothing.
    pub fn decode_headers(&mut self) -> Result<(), PifDecodeErrors> {
        self.decoded_record().map(|_| ())
    }

    fn decoded_record(&mut self) -> Result<&PifRecord, PifDecodeErrors> {
        let record = match self.record.take() {
            Some(record) => record,
            None => self.read_record()?
        };
        Ok(self.record.insert(record))
    }

    fn read_record(&mut self) -> Result<PifRecord, PifDecodeErrors> {
        let mut bytes = Vec::new();
        let mut chunk = [0_u8; PIF_READ_CHUNK];

        loop {
            let read = self.stream.read_bytes(&mut chunk)?;
            if read == 0 {
                break;
            }
            bytes.extend_from_slice(&chunk[..read]);
        }
        let record = PifRecord::parse(&bytes)?;
        let (width, height) = record.dimensions();

        trace!("Width: {}", width);
        trace!("Height: {}", height);
        trace!("File size: {}", record.serialized_size());

        if width > self.options.max_width() {
            return Err(PifDecodeErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                width
            ));
        }
        if height > self.options.max_height() {
            return Err(PifDecodeErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                height
            ));
        }
        if let Err(reason) = record.header().validate() {
            if self.options.strict_mode() {
                return Err(PifDecodeErrors::InvalidHeader(reason));
            }
            warn!("Unexpected PIF header, {}", reason);
        }
        Ok(record)
    }

    /// Image dimensions as a tuple of width and height
    /// or `None` if the headers haven't been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.record.as_ref().map(PifRecord::dimensions)
    }

    /// Colorspace of pixels returned by [`decode`](Self::decode), always RGBA
    pub const fn colorspace(&self) -> ColorSpace {
        PIF_OUTPUT_COLORSPACE
    }

    /// Bit depth of decoded pixels, always eight
    pub const fn depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Metadata block of the file or `None` if the headers
    /// haven't been decoded
    pub fn metadata(&self) -> Option<PifMetadata> {
        self.record.as_ref().map(PifRecord::metadata)
    }

    /// Number of bytes needed to hold the decoded image
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image headers were not decoded
    pub fn output_buffer_size(&self) -> Option<usize> {
        let (width, height) = self.dimensions()?;

        width
            .checked_mul(height)?
            .checked_mul(PIF_OUTPUT_COLORSPACE.num_components())
    }

    /// Decode into a pre-allocated buffer
    ///
    /// It is an error if the buffer size is smaller than
    /// [`output_buffer_size()`](Self::output_buffer_size)
    pub fn decode_into(&mut self, buffer: &mut [u8]) -> Result<(), PifDecodeErrors> {
        self.decoded_record()?.to_raster_into(buffer)
    }

    /// Decode the file returning RGBA pixels with alpha set to 255
    pub fn decode(&mut self) -> Result<Vec<u8>, PifDecodeErrors> {
        self.decoded_record()?.to_raster()
    }

    /// Decode the file and return its structured representation
    pub fn decode_record(mut self) -> Result<PifRecord, PifDecodeErrors> {
        match self.record.take() {
            Some(record) => Ok(record),
            None => self.read_record()
        }
    }
}

impl PifRecord {
    /// Split the bytes of a PIF file into its sections
    ///
    /// Fields are taken by position, the image payload is whatever lies
    /// between the header and the last 33 bytes. The trailer is not checked
    /// and header values are not validated, see [`PifHeader::validate`].
    ///
    /// # Errors
    /// [`PifDecodeErrors::TruncatedInput`] if `bytes` is shorter than 46 bytes
    pub fn parse(bytes: &[u8]) -> Result<PifRecord, PifDecodeErrors> {
        if bytes.len() < PIF_MIN_SIZE {
            return Err(PifDecodeErrors::TruncatedInput(PIF_MIN_SIZE, bytes.len()));
        }
        let (header, rest) = bytes.split_at(PIF_HEADER_SIZE);
        let (image, tail) = rest.split_at(rest.len() - PIF_TAIL_SIZE);
        let (author_initials, tail) = tail.split_at(PIF_INITIALS_SIZE);
        let (date_and_time, tail) = tail.split_at(PIF_DATE_TIME_SIZE);
        let (signature, _trailer) = tail.split_at(PIF_SIGNATURE_SIZE);

        let header = PifHeader::from_bytes(fixed(header));
        let content = PifContent::new(image.to_vec(), *fixed(author_initials), *fixed(date_and_time));
        let footer = PifFooter::new(*fixed(signature));

        Ok(PifRecord::new(header, content, footer))
    }

    /// Number of bytes [`to_raster`](Self::to_raster) produces
    fn expected_image_size(&self) -> Result<usize, PifDecodeErrors> {
        let (width, height) = self.dimensions();
        let expected = width
            .saturating_mul(height)
            .saturating_mul(PIF_BYTES_PER_PIXEL);
        let found = self.content().image().len();

        if expected != found {
            return Err(PifDecodeErrors::DimensionMismatch(expected, found));
        }
        Ok(expected)
    }

    /// Rebuild the raster as RGBA pixels, alpha is always 255
    ///
    /// # Errors
    /// [`PifDecodeErrors::DimensionMismatch`] if the payload is not
    /// `width*height*3` bytes
    pub fn to_raster(&self) -> Result<Vec<u8>, PifDecodeErrors> {
        let size = self.expected_image_size()? / PIF_BYTES_PER_PIXEL
            * PIF_OUTPUT_COLORSPACE.num_components();
        let mut pixels = vec![0; size];

        self.to_raster_into(&mut pixels)?;

        Ok(pixels)
    }

    /// Rebuild the raster as RGBA pixels into `output`
    ///
    /// Extra space at the end of `output` is left untouched
    pub fn to_raster_into(&self, output: &mut [u8]) -> Result<(), PifDecodeErrors> {
        let size = self.expected_image_size()? / PIF_BYTES_PER_PIXEL
            * PIF_OUTPUT_COLORSPACE.num_components();

        if output.len() < size {
            return Err(PifDecodeErrors::TooSmallOutputArray(size, output.len()));
        }
        for (bgr, rgba) in self
            .content()
            .image()
            .chunks_exact(PIF_BYTES_PER_PIXEL)
            .zip(output.chunks_exact_mut(4))
        {
            rgba[0] = bgr[2];
            rgba[1] = bgr[1];
            rgba[2] = bgr[0];
            rgba[3] = 255;
        }
        Ok(())
    }

    /// Rebuild the raster as packed `0xAARRGGBB` values, alpha is always 255
    pub fn to_argb(&self) -> Result<Vec<u32>, PifDecodeErrors> {
        self.expected_image_size()?;

        Ok(self
            .content()
            .image()
            .chunks_exact(PIF_BYTES_PER_PIXEL)
            .map(|bgr| u32::from_be_bytes([255, bgr[2], bgr[1], bgr[0]]))
            .collect())
    }
}

/// View a slice whose length was already checked as an array
fn fixed<const N: usize>(bytes: &[u8]) -> &[u8; N] {
    match bytes.try_into() {
        Ok(array) => array,
        Err(_) => unreachable!("section length is fixed by split_at")
    }
}
