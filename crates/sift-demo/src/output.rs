//! Writing filter results.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Format;
use crate::product::Product;

/// One labelled filter result.
#[derive(Debug, Serialize)]
pub struct Section<'a> {
    pub predicate: String,
    pub matches: Vec<&'a Product>,
}

/// Writes each section's matching names, one per line, with a blank line
/// after each section. In JSON mode writes the sections as an array.
pub fn write_sections<W: Write>(
    out: &mut W,
    format: Format,
    sections: &[Section<'_>],
) -> io::Result<()> {
    match format {
        Format::Text => {
            for section in sections {
                for product in &section.matches {
                    writeln!(out, "{}", product.name)?;
                }
                writeln!(out)?;
            }
            Ok(())
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, sections)?;
            writeln!(out)
        }
    }
}
