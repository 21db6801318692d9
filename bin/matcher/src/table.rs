//! Loading a reference color table from a text file.
//!
//! Each line holds a label followed by a `rrggbb` hex color, separated by
//! whitespace. Anything after the second token is ignored, as are lines
//! shorter than [`MIN_LINE_LEN`] bytes. Bytes that are not valid UTF-8 are
//! replaced rather than rejected.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use dinmatch::ColorTable;

/// Lines shorter than this cannot hold a label and a color and are skipped.
pub const MIN_LINE_LEN: usize = 8;

/// Read a color table from `reader`. A label that appears more than once
/// keeps the color of its last line.
pub fn parse_table(reader: impl BufRead) -> io::Result<ColorTable> {
    let mut table = ColorTable::new();

    for line in reader.split(b'\n') {
        let line = line?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        if line.len() < MIN_LINE_LEN {
            continue;
        }

        let line = String::from_utf8_lossy(line);
        let mut tokens = line.split_whitespace();
        let Some(label) = tokens.next() else {
            continue;
        };
        let rgb = tokens.next().unwrap_or_default();

        table.insert(label.to_owned(), rgb.to_owned());
    }

    Ok(table)
}

/// Read a color table from the file at `path`.
pub fn load_table(path: impl AsRef<Path>) -> io::Result<ColorTable> {
    parse_table(BufReader::new(File::open(path)?))
}
