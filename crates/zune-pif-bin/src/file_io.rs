/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing files, both raw PIF bytes and regular images
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_image::image::Image;

use crate::errors::PifCliErrors;

/// An interleaved 8 bit pixel buffer
pub struct Raster {
    pub pixels:     Vec<u8>,
    pub width:      usize,
    pub height:     usize,
    pub colorspace: ColorSpace
}

/// Colorspaces the PIF encoder accepts without conversion
const fn is_pif_colorspace(colorspace: ColorSpace) -> bool {
    matches!(
        colorspace,
        ColorSpace::RGB
            | ColorSpace::RGBA
            | ColorSpace::BGR
            | ColorSpace::BGRA
            | ColorSpace::ARGB
            | ColorSpace::Luma
            | ColorSpace::LumaA
    )
}

pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, PifCliErrors> {
    let path = path.as_ref();
    let mut fd = File::open(path)?;

    let mut buf = Vec::with_capacity(1 << 20);
    fd.read_to_end(&mut buf)?;

    info!("Read {} bytes from {:?}", buf.len(), path);
    Ok(buf)
}

pub fn write_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), PifCliErrors> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;

    info!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(())
}

/// Decode a regular image into an 8 bit raster the PIF encoder accepts
///
/// Higher bit depths are scaled down, colorspaces such as YCbCr or CMYK
/// are converted to RGB. Only the first frame of animated images is kept.
pub fn read_raster<P: AsRef<Path>>(path: P) -> Result<Raster, PifCliErrors> {
    let path = path.as_ref();
    let mut image = Image::open(path)?;

    let (width, height) = image.dimensions();
    debug!(
        "Opened {:?}: {}x{} {:?} {:?}",
        path,
        width,
        height,
        image.colorspace(),
        image.depth()
    );

    if image.depth() != BitDepth::Eight {
        debug!("Converting depth {:?} to 8 bit", image.depth());
        image.convert_depth(BitDepth::Eight)?;
    }
    if !is_pif_colorspace(image.colorspace()) {
        debug!("Converting colorspace {:?} to RGB", image.colorspace());
        image.convert_color(ColorSpace::RGB)?;
    }

    let colorspace = image.colorspace();
    let pixels = image
        .flatten_to_u8()
        .into_iter()
        .next()
        .ok_or(PifCliErrors::NoFrames)?;

    Ok(Raster {
        pixels,
        width,
        height,
        colorspace
    })
}

/// Save RGBA pixels, the format is picked from the extension of `path`
pub fn write_raster<P: AsRef<Path>>(
    path: P, pixels: &[u8], width: usize, height: usize
) -> Result<(), PifCliErrors> {
    let path = path.as_ref();
    let image = Image::from_u8(pixels, width, height, ColorSpace::RGBA);

    image.save(path)?;
    info!("Saved {}x{} image to {:?}", width, height, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use super::is_pif_colorspace;

    #[test]
    fn only_foreign_colorspaces_are_converted() {
        assert!(is_pif_colorspace(ColorSpace::RGB));
        assert!(is_pif_colorspace(ColorSpace::LumaA));
        assert!(is_pif_colorspace(ColorSpace::ARGB));
        assert!(!is_pif_colorspace(ColorSpace::YCbCr));
        assert!(!is_pif_colorspace(ColorSpace::CMYK));
    }
}
