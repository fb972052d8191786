/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{
    DECODE_HELP, ENCODE_HELP, HEXDUMP_HELP, INITIALS_HELP, SIGNATURE_HELP, STRICT_HELP
};

pub mod help_strings;

#[rustfmt::skip]
fn input_arg(help: &'static str) -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help(help)
        .required(true)
}

#[rustfmt::skip]
fn output_arg(help: &'static str) -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help(help)
        .required(true)
}

#[rustfmt::skip]
fn encode_cmd() -> Command {
    Command::new("encode")
        .about("Convert a regular image to PIF")
        .long_about(ENCODE_HELP)
        .arg(input_arg("Image to read, format is detected from content"))
        .arg(output_arg("PIF file to write"))
        .arg(Arg::new("initials")
            .long("initials")
            .help("Author initials, at most two characters are kept")
            .long_help(INITIALS_HELP)
            .default_value(""))
        .arg(Arg::new("signature")
            .long("signature")
            .help("Signature, at most 16 characters are kept")
            .long_help(SIGNATURE_HELP)
            .default_value(""))
}

#[rustfmt::skip]
fn decode_cmd() -> Command {
    Command::new("decode")
        .about("Convert a PIF file to a regular image")
        .long_about(DECODE_HELP)
        .arg(input_arg("PIF file to read"))
        .arg(output_arg("Image to write, format is chosen from the extension"))
}

#[rustfmt::skip]
fn metadata_cmd() -> Command {
    Command::new("metadata")
        .about("Print the date, author initials and signature of a PIF file")
        .arg(input_arg("PIF file to read"))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print metadata as a JSON object"))
}

#[rustfmt::skip]
fn hexdump_cmd() -> Command {
    Command::new("hexdump")
        .about("Print a hexdump of a PIF file")
        .long_about(HEXDUMP_HELP)
        .arg(input_arg("PIF file to read"))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pif")
        .about("Convert images to and from PIF. Starts an interactive menu when no subcommand is given")
        .subcommand(encode_cmd())
        .subcommand(decode_cmd())
        .subcommand(metadata_cmd())
        .subcommand(hexdump_cmd())
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .value_parser(value_parser!(usize))
            .default_value("65536")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of a PIF file accepted by the decoder"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .value_parser(value_parser!(usize))
            .default_value("65536")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of a PIF file accepted by the decoder"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Reject files with unexpected header bytes")
            .long_help(STRICT_HELP))
}

#[cfg(test)]
mod tests {
    use super::create_cmd_args;

    #[test]
    fn command_definition_is_valid() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pif", "hexdump", "-i", "a.pif", "--debug", "--max-width=10"])
            .unwrap();

        assert!(matches.get_flag("debug"));
        assert_eq!(matches.get_one::<usize>("max-width"), Some(&10));

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "hexdump");
        assert_eq!(sub.get_one::<String>("in").unwrap(), "a.pif");
    }

    #[test]
    fn encode_defaults_to_empty_text() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pif", "encode", "-i", "a.png", "-o", "a.pif"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(sub.get_one::<String>("initials").unwrap(), "");
        assert_eq!(sub.get_one::<String>("signature").unwrap(), "");
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let matches = create_cmd_args().try_get_matches_from(["pif"]).unwrap();

        assert!(matches.subcommand().is_none());
        assert_eq!(matches.get_one::<usize>("max-height"), Some(&65536));
    }
}
