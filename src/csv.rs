// src/csv.rs
use std::io::{self, Write};

/// Field separator for table exports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write an optional header line followed by every row.
pub fn write_table<W: Write>(
    mut w: W,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    delim: Delim,
) -> io::Result<()> {
    if let Some(h) = headers {
        write_row(&mut w, h, delim)?;
    }
    for r in rows {
        write_row(&mut w, r, delim)?;
    }
    Ok(())
}

/// [`write_table`] into a `String`.
pub fn rows_to_string(rows: &[Vec<String>], headers: &Option<Vec<String>>, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec can't fail.
    let _ = write_table(&mut buf, headers, rows, delim);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
