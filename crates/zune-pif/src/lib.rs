/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding and encoding PIF images
//!
//! PIF is a fixed layout container for uncompressed 24 bit images with a small
//! metadata block. All multi-byte numbers are little endian.
//! ```text
//! ╔═══════════╤════════╤═══════════════════════════════════════════════════════╗
//! ║ Offset    │ Bytes  │ Description                                           ║
//! ╠═══════════╪════════╪═══════════════════════════════════════════════════════╣
//! ║ 0         │ 1      │ Color map type, always 0                              ║
//! ╟───────────┼────────┼───────────────────────────────────────────────────────╢
//! ║ 1         │ 1      │ Image type, always 2                                  ║
//! ╟───────────┼────────┼───────────────────────────────────────────────────────╢
//! ║ 2         │ 5      │ Color map specification, zeroed                       ║
//! ╟───────────┼────────┼───────────────────────────────────────────────────────╢
//! ║ 7         │ 6      │ Width (u16), height (u16), 24, 32                     ║
//! ╟───────────┼────────┼───────────────────────────────────────────────────────╢
//! ║ 13        │ 3*W*H  │ B,G,R / pixel, row-major                              ║
//! ╟───────────┼────────┼───────────────────────────────────────────────────────╢
//! ║ 13+3WH    │ 3      │ Author initials, two characters and a zero byte       ║
//! ╟───────────┼────────┼───────────────────────────────────────────────────────╢
//! ║ 16+3WH    │ 12     │ Month, day, year, hour, minute, second (u16 each)     ║
//! ╟───────────┼────────┼───────────────────────────────────────────────────────╢
//! ║ 28+3WH    │ 16     │ Signature, space padded                               ║
//! ╟───────────┼────────┼───────────────────────────────────────────────────────╢
//! ║ 44+3WH    │ 2      │ 0x2E, 0x00                                            ║
//! ╚═══════════╧════════╧═══════════════════════════════════════════════════════╝
//!```
//!
//! Alpha is not stored, decoded images are always RGBA with an opaque alpha channel.
//!
//! # Features
//! - `log`: Forward trace and warning messages to the `log` crate
//! - `std`: Implement `std::error::Error` for the error types, without it the crate is `no_std` + `alloc`
//! - `serde`: Serialize [`PifMetadata`] and [`PifTimestamp`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use hexdump::render_hexdump;
pub use metadata::PifMetadata;
pub use record::{PifContent, PifFooter, PifHeader, PifRecord, PifTimestamp};
pub use zune_core;

pub mod constants;
mod decoder;
mod encoder;
mod errors;
mod hexdump;
mod metadata;
mod record;
