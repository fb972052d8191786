/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line front end for the PIF codec
//!
//! Each subcommand runs once and exits, without a subcommand an
//! interactive menu offers the same four operations.
use std::io::{stdin, stdout};
use std::process::exit;

use log::error;

pub use crate::errors::PifCliErrors;
pub use crate::workflow::{decode_file, encode_file, hexdump_file, metadata_json, metadata_text};

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod interactive;
mod serde;
mod workflow;

pub use cmd_parsers::global_options::CmdOptions;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let result = match workflow::exec_subcommand(&options, &parsed_opts) {
        Ok(true) => Ok(()),
        Ok(false) => interactive::run_menu(&mut stdin().lock(), &mut stdout(), &parsed_opts),
        Err(err) => Err(err)
    };

    if let Err(err) = result {
        println!();
        error!(" Could not complete workflow, reason {:?}", err);
        println!();
        exit(-1);
    }
}
