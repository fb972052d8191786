/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Menu driven mode used when no subcommand is given
use std::io::{BufRead, Write};

use log::error;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::PifCliErrors;
use crate::workflow::{decode_file, encode_file, hexdump_file, metadata_text};

const MENU: &str = "
1. Convert regular image to .pif
2. Convert .pif to regular image
3. Read metadata of .pif
4. Hexdump of .pif
0. Exit
";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum MenuChoice {
    Encode,
    Decode,
    Metadata,
    Hexdump,
    Exit
}

impl MenuChoice {
    fn from_input(input: &str) -> Result<MenuChoice, &'static str> {
        let number = input
            .trim()
            .parse::<i64>()
            .map_err(|_| "Please enter a valid number")?;

        match number {
            1 => Ok(MenuChoice::Encode),
            2 => Ok(MenuChoice::Decode),
            3 => Ok(MenuChoice::Metadata),
            4 => Ok(MenuChoice::Hexdump),
            0 => Ok(MenuChoice::Exit),
            _ => Err("Enter number in required range")
        }
    }
}

/// Print `prompt` and read one line, `None` once input is exhausted
fn read_line<R: BufRead, W: Write>(
    input: &mut R, output: &mut W, prompt: &str
) -> Result<Option<String>, PifCliErrors> {
    writeln!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Keep asking until a valid menu entry is entered
fn read_choice<R: BufRead, W: Write>(
    input: &mut R, output: &mut W
) -> Result<Option<MenuChoice>, PifCliErrors> {
    loop {
        let Some(line) = read_line(input, output, "Write a number between 0 and 4 and press enter.")?
        else {
            return Ok(None);
        };
        match MenuChoice::from_input(&line) {
            Ok(choice) => return Ok(Some(choice)),
            Err(reason) => writeln!(output, "\n{reason}")?
        }
    }
}

/// Run one menu entry, `Ok(None)` means input ran out halfway
fn run_choice<R: BufRead, W: Write>(
    choice: MenuChoice, input: &mut R, output: &mut W, cmd_opts: &CmdOptions
) -> Result<Option<()>, PifCliErrors> {
    macro_rules! ask {
        ($prompt:expr) => {
            match read_line(input, output, $prompt)? {
                Some(line) => line,
                None => return Ok(None)
            }
        };
    }

    match choice {
        MenuChoice::Encode => {
            let in_path = ask!("Write input image path (including extension).");
            let out_path = ask!("Write output image path (including extension).");
            let initials = ask!("Write author initial (max 2 characters, for none press enter).");
            let signature = ask!("Write signature (max 16 characters, for none press enter).");

            encode_file(in_path, out_path, &initials, &signature)?;
        }
        MenuChoice::Decode => {
            let in_path = ask!("Write input image path (including extension).");
            let out_path = ask!("Write output image path (including extension).");

            decode_file(in_path, out_path, cmd_opts)?;
        }
        MenuChoice::Metadata => {
            let in_path = ask!("Write input .pif path (including extension).");
            writeln!(output, "{}", metadata_text(in_path, cmd_opts)?)?;
        }
        MenuChoice::Hexdump => {
            let in_path = ask!("Write input .pif path (including extension).");
            write!(output, "{}", hexdump_file(in_path, cmd_opts)?)?;
        }
        MenuChoice::Exit => {}
    }
    Ok(Some(()))
}

/// Show the menu until `0` is chosen or input ends
///
/// A failing entry is reported and the menu is shown again.
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R, output: &mut W, cmd_opts: &CmdOptions
) -> Result<(), PifCliErrors> {
    loop {
        write!(output, "{MENU}")?;

        let choice = match read_choice(input, output)? {
            Some(MenuChoice::Exit) | None => return Ok(()),
            Some(choice) => choice
        };

        match run_choice(choice, input, output, cmd_opts) {
            Ok(Some(())) => {}
            Ok(None) => return Ok(()),
            Err(err) => {
                error!("Could not complete {:?}, reason {:?}", choice, err);
                writeln!(output, "Error with files, double check the paths, file names and extensions")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{run_menu, MenuChoice};
    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::file_io::write_bytes;

    fn run(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        run_menu(&mut input, &mut output, &CmdOptions::new()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn choices_are_parsed() {
        assert_eq!(MenuChoice::from_input(" 3\n"), Ok(MenuChoice::Metadata));
        assert_eq!(MenuChoice::from_input("0"), Ok(MenuChoice::Exit));
        assert_eq!(
            MenuChoice::from_input("5"),
            Err("Enter number in required range")
        );
        assert_eq!(
            MenuChoice::from_input("-1"),
            Err("Enter number in required range")
        );
        assert_eq!(
            MenuChoice::from_input("two"),
            Err("Please enter a valid number")
        );
    }

    #[test]
    fn invalid_choices_prompt_again() {
        let output = run("7\nabc\n0\n");

        assert!(output.contains("Enter number in required range"));
        assert!(output.contains("Please enter a valid number"));
        assert_eq!(output.matches("1. Convert regular image to .pif").count(), 1);
    }

    #[test]
    fn exhausted_input_leaves_the_menu() {
        let output = run("3\n");
        assert!(output.ends_with("Write input .pif path (including extension).\n"));
    }

    #[test]
    fn metadata_of_a_file_then_error_then_exit() {
        let mut bytes = vec![0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 24, 32];
        bytes.extend_from_slice(b"XY\0");
        bytes.extend_from_slice(&[7, 0, 4, 0, 0xE8, 0x07, 9, 0, 5, 0, 30, 0]);
        bytes.extend_from_slice(b"AB              ");
        bytes.extend_from_slice(&[0x2E, 0x00]);

        let path = std::env::temp_dir().join(format!(
            "zune-pif-bin-{}-menu-metadata.pif",
            std::process::id()
        ));
        write_bytes(&path, &bytes).unwrap();

        let script = format!("3\n{}\n4\n/nonexistent/file.pif\n0\n", path.display());
        let output = run(&script);

        assert!(output.contains("Date and Time: 2024/7/4, 9:5:30\nAuthor Initials: XY\n"));
        assert!(output.contains("Error with files"));
        assert_eq!(output.matches("0. Exit").count(), 3);

        let _ = std::fs::remove_file(path);
    }
}
