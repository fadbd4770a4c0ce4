//! Interactive prompts for the `analyze` command.
//!
//! Readers and writers are generic so the loops can be driven from tests.

use crate::errors::{AppError, AppResult};
use crate::models::{Ein, extract_ein};
use crate::utils::date::{format_br, parse_date};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Yes/no question; anything but "y"/"yes"/"s"/"sim" is a no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> AppResult<bool> {
    write!(output, "{} [y/N]: ", question)?;
    output.flush()?;

    let answer = read_line(input)?.unwrap_or_default().to_ascii_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes" | "s" | "sim"))
}

/// Ask for the visit date until it parses. A blank line means `today`.
pub fn prompt_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    today: NaiveDate,
) -> AppResult<NaiveDate> {
    loop {
        writeln!(output, "Visit date (leave blank for \"{}\"):", format_br(today))?;
        write!(output, ">>> ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Err(AppError::Cancelled("input closed before a date was entered".into()));
        };

        if line.is_empty() {
            return Ok(today);
        }

        match parse_date(&line) {
            Some(d) => return Ok(d),
            None => writeln!(output, "Invalid date '{}', use DD/MM/YYYY.", line)?,
        }
    }
}

/// Read EINs (typed or scanned QR URLs) one per line until a blank line or
/// end of input. Invalid lines are reported and skipped, repeats ignored.
pub fn prompt_eins<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<Vec<Ein>> {
    let mut eins: Vec<Ein> = Vec::new();

    loop {
        write!(output, "CNPJ: ")?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(l) if !l.is_empty() => l,
            _ => break,
        };

        match extract_ein(&line) {
            Ok(ein) if eins.contains(&ein) => writeln!(output, "  {} already entered", ein)?,
            Ok(ein) => {
                eins.push(ein);
                for (i, e) in eins.iter().enumerate() {
                    writeln!(output, "  {:>3}. {}", i + 1, e)?;
                }
            }
            Err(e) => writeln!(output, "  {}", e)?,
        }
    }

    Ok(eins)
}
