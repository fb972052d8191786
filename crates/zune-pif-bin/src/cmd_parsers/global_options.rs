/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use zune_pif::PifDecoderOptions;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CmdOptions {
    pub max_width:   usize,
    pub max_height:  usize,
    pub strict_mode: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        let defaults = PifDecoderOptions::default();

        CmdOptions {
            max_width:   defaults.max_width(),
            max_height:  defaults.max_height(),
            strict_mode: defaults.strict_mode()
        }
    }

    /// Options handed to every PIF decoder created by a workflow
    pub fn decoder_options(&self) -> PifDecoderOptions {
        PifDecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_strict_mode(self.strict_mode)
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    if options.get_flag("strict") {
        info!("Strict mode enabled");
        cmd_options.strict_mode = true;
    }
    info!(
        "Decoder limits: width={} height={}",
        cmd_options.max_width, cmd_options.max_height
    );
    cmd_options
}

/// Log level chosen by the logging flags, warn when none is given
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
