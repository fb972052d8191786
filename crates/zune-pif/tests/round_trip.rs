/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_pif::{PifDecoder, PifEncoder, PifRecord, PifTimestamp};

fn encode(
    pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace, initials: &str,
    signature: &str
) -> Vec<u8> {
    let mut encoder = PifEncoder::new_with_dimensions(pixels, width, height, colorspace);
    encoder.set_author_initials(initials);
    encoder.set_signature(signature);
    encoder.set_timestamp(PifTimestamp::new(2023, 12, 31, 23, 59, 58));

    let mut sink = vec![];
    encoder.encode(&mut sink).unwrap();
    sink
}

#[test]
fn random_rgba_round_trip() {
    let mut rand = WyRand::new_seed(0x50_49_46);

    for _ in 0..20 {
        let width = rand.generate_range(1_usize..=40);
        let height = rand.generate_range(1_usize..=40);

        let mut pixels = vec![0_u8; width * height * 4];
        rand.fill(&mut pixels);

        let file = encode(&pixels, width, height, ColorSpace::RGBA, "ZI", "round trip");
        assert_eq!(file.len(), 46 + 3 * width * height);

        let mut decoder = PifDecoder::new(ZCursor::new(&file));
        let decoded = decoder.decode().unwrap();

        assert_eq!(decoder.dimensions(), Some((width, height)));
        assert_eq!(decoded.len(), pixels.len());

        for (original, restored) in pixels.chunks_exact(4).zip(decoded.chunks_exact(4)) {
            assert_eq!(&original[..3], &restored[..3]);
            assert_eq!(restored[3], 255);
        }
    }
}

#[test]
fn argb_view_matches_rgba_view() {
    let pixels = [0x10, 0x20, 0x30, 0x40, 0x50, 0x60];
    let file = encode(&pixels, 1, 2, ColorSpace::RGB, "", "");
    let record = PifRecord::parse(&file).unwrap();

    assert_eq!(record.to_argb().unwrap(), [0xFF10_2030, 0xFF40_5060]);
    assert_eq!(
        record.to_raster().unwrap(),
        [0x10, 0x20, 0x30, 0xFF, 0x40, 0x50, 0x60, 0xFF]
    );
}

#[test]
fn serialized_layout() {
    let file = encode(&[1, 2, 3], 1, 1, ColorSpace::RGB, "XY", "AB");

    let mut expected = vec![0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 24, 32];
    expected.extend_from_slice(&[3, 2, 1]);
    expected.extend_from_slice(&[0x58, 0x59, 0x00]);
    expected.extend_from_slice(&[12, 0, 31, 0, 0xE7, 0x07, 23, 0, 59, 0, 58, 0]);
    expected.extend_from_slice(&[0x41, 0x42]);
    expected.extend_from_slice(&[0x20; 14]);
    expected.extend_from_slice(&[0x2E, 0x00]);

    assert_eq!(file, expected);
}

#[test]
fn parse_then_serialize_is_identity() {
    let mut rand = WyRand::new_seed(7);
    let mut pixels = vec![0_u8; 5 * 3 * 3];
    rand.fill(&mut pixels);

    let file = encode(&pixels, 5, 3, ColorSpace::BGR, "ab", "0123456789abcdef");
    let record = PifRecord::parse(&file).unwrap();

    assert_eq!(record.serialize(), file);
    assert_eq!(record.serialized_size(), file.len());
}

#[test]
fn metadata_survives_the_file() {
    let file = encode(&[0; 12], 2, 2, ColorSpace::RGB, "CEX", "zune-image rocks!");

    let mut decoder = PifDecoder::new(ZCursor::new(&file));
    decoder.decode_headers().unwrap();
    let metadata = decoder.metadata().unwrap();

    assert_eq!(metadata.timestamp(), PifTimestamp::new(2023, 12, 31, 23, 59, 58));
    assert_eq!(metadata.author_initials(), "CE");
    assert_eq!(metadata.signature(), "zune-image rocks");
}

#[test]
fn empty_image_round_trip() {
    let file = encode(&[], 0, 0, ColorSpace::RGB, "", "");
    assert_eq!(file.len(), 46);

    let record = PifDecoder::new(ZCursor::new(&file)).decode_record().unwrap();
    assert_eq!(record.dimensions(), (0, 0));
    assert!(record.to_raster().unwrap().is_empty());
}

#[test]
fn rows_without_height_round_trip() {
    let file = encode(&[], 7, 0, ColorSpace::RGB, "CE", "no rows");
    assert_eq!(file.len(), 46);
    assert_eq!(&file[7..11], &[7, 0, 0, 0]);

    let mut decoder = PifDecoder::new(ZCursor::new(&file));
    let pixels = decoder.decode().unwrap();

    assert_eq!(decoder.dimensions(), Some((7, 0)));
    assert_eq!(decoder.output_buffer_size(), Some(0));
    assert!(pixels.is_empty());
    assert_eq!(decoder.metadata().unwrap().author_initials(), "CE");
}

#[test]
fn hexdump_of_a_fifty_byte_file() {
    // a 1x1 file is 49 bytes, one extra payload byte makes it 50
    let mut file = encode(&[1, 2, 3], 1, 1, ColorSpace::RGB, "", "");
    file.insert(16, 4);
    assert_eq!(file.len(), 50);

    let dump = PifRecord::parse(&file).unwrap().hexdump();
    let lines: Vec<&str> = dump.lines().skip(1).collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("00 "));
    assert!(lines[3].starts_with("30 "));
    assert_eq!(lines[3].split(' ').count(), 3);
}

#[test]
fn hexdump_of_a_sixty_four_byte_file() {
    let file = encode(&[0x7F; 18], 2, 3, ColorSpace::RGB, "", "");
    assert_eq!(file.len(), 64);

    let dump = PifRecord::parse(&file).unwrap().hexdump();
    let lines: Vec<&str> = dump.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1].split(' ').count(), 17);
    assert_eq!(lines[3].split(' ').count(), 17);
    assert_eq!(lines[4], "30");
}
