//! Line-based input helpers for the console.
//!
//! The `read_*` parsers re-prompt until the operator types something valid.
//! End of input surfaces as `io::ErrorKind::UnexpectedEof` so the caller can
//! stop instead of prompting forever.

use chrono::NaiveDate;
use domain::round_salary;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Accepted hire date layout, e.g. `2024-01-31`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const INVALID_NUMBER: &str = "Please enter a valid number!";
const INVALID_DATE: &str = "Please enter date in yyyy-MM-dd format!";

/// Prints `prompt` and returns the next line with surrounding whitespace removed.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

pub fn read_i32<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<i32> {
    read_parsed(input, output, prompt, INVALID_NUMBER, |s| s.parse().ok())
}

pub fn read_decimal<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Decimal> {
    read_parsed(input, output, prompt, INVALID_NUMBER, parse_salary)
}

pub fn read_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<NaiveDate> {
    read_parsed(input, output, prompt, INVALID_DATE, parse_date)
}

fn read_parsed<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    complaint: &str,
    parse: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let line = read_line(input, output, prompt)?;
        match parse(&line) {
            Some(value) => return Ok(value),
            None => writeln!(output, "{}", complaint)?,
        }
    }
}

/// Plain decimal number such as `52000` or `52000.50`, rounded to cents.
pub fn parse_salary(s: &str) -> Option<Decimal> {
    Decimal::from_str(s).ok().map(round_salary)
}

/// Strict `yyyy-MM-dd`: four-digit year, two-digit month and day.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let well_formed = s.len() == 10
        && s.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}
