//! Thin helpers for line-oriented puzzle input.

use std::io::{self, Read};

/// Read all of standard input into a string.
pub fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().lock().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Lines of `input` up to (not including) the first empty line.
///
/// A trailing `'\r'` is stripped from every line.
pub fn lines_until_empty(input: &str) -> impl Iterator<Item = &str> {
    input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .take_while(|line| !line.is_empty())
}
