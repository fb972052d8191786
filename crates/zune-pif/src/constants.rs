/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Size of the header section, color map type, image type,
/// color map specification and image specification
pub const PIF_HEADER_SIZE: usize = 13;
/// Author initials field inside the content section
pub const PIF_INITIALS_SIZE: usize = 3;
/// Six 16 bit date and time fields
pub const PIF_DATE_TIME_SIZE: usize = 12;
/// Signature field, the whole footer section
pub const PIF_SIGNATURE_SIZE: usize = 16;
/// Bytes appended after the footer when serializing
pub const PIF_TRAILER: [u8; 2] = [0x2E, 0x00];

/// Bytes following the image payload, fixed content fields, footer and trailer
pub const PIF_TAIL_SIZE: usize =
    PIF_INITIALS_SIZE + PIF_DATE_TIME_SIZE + PIF_SIGNATURE_SIZE + PIF_TRAILER.len();

/// Smallest possible PIF file, a file with an empty image
pub const PIF_MIN_SIZE: usize = PIF_HEADER_SIZE + PIF_TAIL_SIZE;

/// No color map present
pub const PIF_COLOR_MAP_TYPE: u8 = 0;
/// Uncompressed true-color image
pub const PIF_IMAGE_TYPE: u8 = 2;
pub const PIF_BITS_PER_PIXEL: u8 = 24;
pub const PIF_DESCRIPTOR: u8 = 32;

/// Bytes stored per pixel in the image payload, B,G,R
pub const PIF_BYTES_PER_PIXEL: usize = 3;

/// Padding byte used by text fields
pub const PIF_PAD_BYTE: u8 = b' ';
