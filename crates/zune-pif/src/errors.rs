/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZByteIoError;
use zune_core::colorspace::ColorSpace;

/// PIF decoding errors
pub enum PifDecodeErrors {
    /// The input is shorter than the smallest possible PIF file
    ///
    /// Contains the minimum expected size and the size found
    TruncatedInput(usize, usize),
    /// Image payload length does not agree with the width and height
    /// stored in the header
    ///
    /// Contains the expected payload size and the size found
    DimensionMismatch(usize, usize),
    /// Too large dimensions for the configured limits
    TooLargeDimensions(&'static str, usize, usize),
    /// A header constant does not have its fixed value,
    /// only reported in strict mode
    InvalidHeader(&'static str),
    /// The output array is too small to contain the whole
    /// image
    TooSmallOutputArray(usize, usize),
    IoErrors(ZByteIoError)
}

impl Debug for PifDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PifDecodeErrors::TruncatedInput(expected, found) => {
                writeln!(
                    f,
                    "Truncated input, a PIF file needs at least {expected} bytes but found {found}"
                )
            }
            PifDecodeErrors::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Image payload of {found} bytes does not match header dimensions, expected {expected} bytes"
                )
            }
            PifDecodeErrors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            PifDecodeErrors::InvalidHeader(reason) => {
                writeln!(f, "Invalid header: {reason}")
            }
            PifDecodeErrors::TooSmallOutputArray(expected, found) => {
                writeln!(f, "Too small of an output array, expected array of at least length {} but found {}", expected, found)
            }
            PifDecodeErrors::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl From<ZByteIoError> for PifDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        PifDecodeErrors::IoErrors(value)
    }
}

impl Display for PifDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PifDecodeErrors {}

/// PIF encoding errors
pub enum PifEncodeErrors {
    /// Width or height cannot be stored in the 16 bit header fields
    ///
    /// Contains the width and height of the raster
    UnsupportedRaster(usize, usize),
    /// The colorspace provided by the user has no BGR mapping
    UnsupportedColorspace(ColorSpace),
    /// PIF stores 8 bit samples only
    UnsupportedBitDepth(BitDepth),
    /// The input size was expected to be of a certain size but isn't
    WrongInputSize(usize, usize),
    IoErrors(ZByteIoError)
}

impl Debug for PifEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PifEncodeErrors::UnsupportedRaster(width, height) => {
                writeln!(
                    f,
                    "Unsupported raster of {width}x{height}, PIF dimensions are limited to {}",
                    u16::MAX
                )
            }
            PifEncodeErrors::UnsupportedColorspace(color) => {
                writeln!(f, "Unsupported colorspace {color:?} for PIF")
            }
            PifEncodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {depth:?}, PIF only stores 8 bit data")
            }
            PifEncodeErrors::WrongInputSize(expected, found) => {
                writeln!(f, "Input array length {found} doesn't match {expected}")
            }
            PifEncodeErrors::IoErrors(err) => writeln!(f, "I/O error {:?}", err)
        }
    }
}

impl From<ZByteIoError> for PifEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        PifEncodeErrors::IoErrors(value)
    }
}

impl Display for PifEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PifEncodeErrors {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::{PifDecodeErrors, PifEncodeErrors};

    #[test]
    fn errors_box_into_std_error() {
        let errors: [Box<dyn std::error::Error>; 2] = [
            Box::new(PifDecodeErrors::TruncatedInput(46, 45)),
            Box::new(PifEncodeErrors::WrongInputSize(12, 9))
        ];

        assert!(errors[0].to_string().contains("at least 46 bytes but found 45"));
        assert!(errors[1].to_string().contains("length 9 doesn't match 12"));
    }
}
