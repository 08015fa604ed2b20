//! Line-oriented stand-in for the converter screen.

use std::io::{BufRead, Write};

use lc_app::{AppResult, ConverterForm, LengthUnit};

const HELP: &str = "commands: value <x> | from <unit> | to <unit> | swap | convert | show | clear | units | help | quit";

pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> AppResult<()> {
    let mut form = ConverterForm::new();
    writeln!(out, "Length Unit Converter")?;
    writeln!(out, "{}", HELP)?;

    for line in input.lines() {
        let line = line?;
        let (cmd, arg) = match line.trim().split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line.trim(), ""),
        };

        match cmd {
            "" => {}
            "value" => form.set_input(arg),
            "from" => match parse_unit(arg) {
                Ok(unit) => form.select_from(unit),
                Err(e) => writeln!(out, "{}", e)?,
            },
            "to" => match parse_unit(arg) {
                Ok(unit) => form.select_to(unit),
                Err(e) => writeln!(out, "{}", e)?,
            },
            "swap" => form.swap_units(),
            "convert" => {
                form.submit();
                if let Some(shown) = form.display_line() {
                    writeln!(out, "{}", shown)?;
                }
            }
            "show" => {
                writeln!(
                    out,
                    "Value: {:?}  From: {}  To: {}",
                    form.input(),
                    form.from_unit(),
                    form.to_unit()
                )?;
                if let Some(shown) = form.display_line() {
                    writeln!(out, "{}", shown)?;
                }
            }
            "clear" => form.clear(),
            "units" => {
                let labels: Vec<&str> = LengthUnit::ALL.iter().map(|u| u.label()).collect();
                writeln!(out, "{}", labels.join(", "))?;
            }
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => break,
            other => writeln!(out, "Unknown command: {} ({})", other, HELP)?,
        }
    }

    Ok(())
}

fn parse_unit(name: &str) -> AppResult<LengthUnit> {
    Ok(name.parse::<LengthUnit>()?)
}
