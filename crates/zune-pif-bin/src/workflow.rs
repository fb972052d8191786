/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use clap::ArgMatches;
use log::{debug, info};
use zune_core::bytestream::ZCursor;
use zune_pif::{PifDecoder, PifEncoder, PifRecord, PifTimestamp};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::PifCliErrors;
use crate::file_io::{read_bytes, read_raster, write_bytes, write_raster};
use crate::serde::Metadata;

/// Run the subcommand present in `args`
///
/// Returns `Ok(false)` when no subcommand was given
pub(crate) fn exec_subcommand(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<bool, PifCliErrors> {
    let Some((name, sub_args)) = args.subcommand() else {
        return Ok(false);
    };
    info!("Running {name}");

    match name {
        "encode" => {
            let initials = string_arg(sub_args, "initials");
            let signature = string_arg(sub_args, "signature");

            encode_file(
                string_arg(sub_args, "in"),
                string_arg(sub_args, "out"),
                initials,
                signature
            )?;
        }
        "decode" => {
            decode_file(
                string_arg(sub_args, "in"),
                string_arg(sub_args, "out"),
                cmd_opts
            )?;
        }
        "metadata" => {
            let input = string_arg(sub_args, "in");

            if sub_args.get_flag("json") {
                println!("{}", metadata_json(input, cmd_opts)?);
            } else {
                println!("{}", metadata_text(input, cmd_opts)?);
            }
        }
        "hexdump" => {
            print!("{}", hexdump_file(string_arg(sub_args, "in"), cmd_opts)?);
        }
        _ => return Err(PifCliErrors::GenericString(format!("Unknown subcommand {name}")))
    }
    Ok(true)
}

fn string_arg<'a>(args: &'a ArgMatches, id: &str) -> &'a str {
    args.get_one::<String>(id).map(String::as_str).unwrap_or_default()
}

/// Convert a date and time to the fields stored in a PIF file
pub fn timestamp_from(time: NaiveDateTime) -> PifTimestamp {
    PifTimestamp::new(
        time.year() as u16,
        time.month() as u16,
        time.day() as u16,
        time.hour() as u16,
        time.minute() as u16,
        time.second() as u16
    )
}

fn verify_file_paths(input: &Path, output: &Path) -> Result<(), PifCliErrors> {
    if input == output {
        return Err(PifCliErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            input
        )));
    }
    if !input.is_file() {
        return Err(PifCliErrors::GenericString(format!(
            "Path {:?} is not a file",
            input
        )));
    }
    Ok(())
}

fn read_record(input: &Path, cmd_opts: &CmdOptions) -> Result<PifRecord, PifCliErrors> {
    let bytes = read_bytes(input)?;
    let decoder =
        PifDecoder::new_with_options(ZCursor::new(bytes.as_slice()), cmd_opts.decoder_options());

    Ok(decoder.decode_record()?)
}

/// Read a regular image and write it out as PIF, stamped with the local time
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P, output: Q, initials: &str, signature: &str
) -> Result<(), PifCliErrors> {
    let (input, output) = (input.as_ref(), output.as_ref());
    verify_file_paths(input, output)?;

    let raster = read_raster(input)?;
    let timestamp = timestamp_from(Local::now().naive_local());
    debug!("Stamping file with {timestamp}");

    let mut encoder =
        PifEncoder::new_with_dimensions(&raster.pixels, raster.width, raster.height, raster.colorspace);
    encoder.set_author_initials(initials);
    encoder.set_signature(signature);
    encoder.set_timestamp(timestamp);

    let mut sink = Vec::with_capacity(encoder.expected_buffer_size().unwrap_or_default());
    encoder.encode(&mut sink)?;

    write_bytes(output, &sink)
}

/// Read a PIF file and save it as a regular image
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P, output: Q, cmd_opts: &CmdOptions
) -> Result<(), PifCliErrors> {
    let (input, output) = (input.as_ref(), output.as_ref());
    verify_file_paths(input, output)?;

    let record = read_record(input, cmd_opts)?;
    let (width, height) = record.dimensions();
    let pixels = record.to_raster()?;

    write_raster(output, &pixels, width, height)
}

/// Labelled date, initials and signature lines of a PIF file
pub fn metadata_text<P: AsRef<Path>>(
    input: P, cmd_opts: &CmdOptions
) -> Result<String, PifCliErrors> {
    let record = read_record(input.as_ref(), cmd_opts)?;
    Ok(record.metadata().to_string())
}

/// Metadata of a PIF file as a pretty printed JSON object
pub fn metadata_json<P: AsRef<Path>>(
    input: P, cmd_opts: &CmdOptions
) -> Result<String, PifCliErrors> {
    let input = input.as_ref();
    let record = read_record(input, cmd_opts)?;
    let metadata = record.metadata();

    Ok(serde_json::to_string_pretty(&Metadata::new(
        input,
        record.dimensions(),
        &metadata
    ))?)
}

pub fn hexdump_file<P: AsRef<Path>>(
    input: P, cmd_opts: &CmdOptions
) -> Result<String, PifCliErrors> {
    Ok(read_record(input.as_ref(), cmd_opts)?.hexdump())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::timestamp_from;
    use zune_pif::PifTimestamp;

    #[test]
    fn local_time_maps_field_by_field() {
        let time = NaiveDate::from_ymd_opt(2024, 7, 4)
            .unwrap()
            .and_hms_opt(9, 5, 30)
            .unwrap();

        assert_eq!(timestamp_from(time), PifTimestamp::new(2024, 7, 4, 9, 5, 30));
    }
}
