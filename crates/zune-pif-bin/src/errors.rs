/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors raised by the command line front end
use std::fmt::{Debug, Display, Formatter};

use zune_image::errors::ImageErrors;
use zune_pif::{PifDecodeErrors, PifEncodeErrors};

/// Everything that can stop a subcommand
pub enum PifCliErrors {
    /// The PIF encoder rejected the raster
    EncodeErrors(PifEncodeErrors),
    /// The input is not a usable PIF file
    DecodeErrors(PifDecodeErrors),
    /// Reading or writing a standard image format failed
    ImageErrors(ImageErrors),
    /// Reading or writing raw bytes failed
    IoErrors(std::io::Error),
    /// Serializing metadata to JSON failed
    JsonErrors(serde_json::Error),
    /// The input image decoded to no frames
    NoFrames,
    GenericString(String)
}

impl Debug for PifCliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PifCliErrors::EncodeErrors(err) => {
                writeln!(f, "Could not encode PIF: {:?}", err)
            }
            PifCliErrors::DecodeErrors(err) => {
                writeln!(f, "Could not decode PIF: {:?}", err)
            }
            PifCliErrors::ImageErrors(err) => {
                writeln!(f, "Image error: {:?}", err)
            }
            PifCliErrors::IoErrors(err) => {
                writeln!(f, "I/O error: {}", err)
            }
            PifCliErrors::JsonErrors(err) => {
                writeln!(f, "Could not serialize metadata: {}", err)
            }
            PifCliErrors::NoFrames => {
                writeln!(f, "Image contains no frames")
            }
            PifCliErrors::GenericString(err) => {
                writeln!(f, "{}", err)
            }
        }
    }
}

impl Display for PifCliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PifCliErrors {}

impl From<PifEncodeErrors> for PifCliErrors {
    fn from(value: PifEncodeErrors) -> Self {
        PifCliErrors::EncodeErrors(value)
    }
}

impl From<PifDecodeErrors> for PifCliErrors {
    fn from(value: PifDecodeErrors) -> Self {
        PifCliErrors::DecodeErrors(value)
    }
}

impl From<ImageErrors> for PifCliErrors {
    fn from(value: ImageErrors) -> Self {
        PifCliErrors::ImageErrors(value)
    }
}

impl From<std::io::Error> for PifCliErrors {
    fn from(value: std::io::Error) -> Self {
        PifCliErrors::IoErrors(value)
    }
}

impl From<serde_json::Error> for PifCliErrors {
    fn from(value: serde_json::Error) -> Self {
        PifCliErrors::JsonErrors(value)
    }
}
