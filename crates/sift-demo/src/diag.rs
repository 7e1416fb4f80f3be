//! Verbose diagnostics on stderr.
//!
//! Results go to stdout; anything written here is commentary and can be
//! dropped without changing what the command reports.

use std::io::{self, Write};

use console::Style;

pub struct Diagnostics<W> {
    enabled: bool,
    out: W,
    style: Style,
}

impl Diagnostics<io::Stderr> {
    /// Diagnostics on the process stderr, colored when stderr is a terminal.
    pub fn stderr(enabled: bool) -> Self {
        let colored = console::Term::stderr().features().colors_supported();
        Diagnostics {
            enabled,
            out: io::stderr(),
            style: Style::new().dim().for_stderr().force_styling(colored),
        }
    }
}

impl<W: Write> Diagnostics<W> {
    /// Plain, uncolored diagnostics into any writer.
    pub fn new(enabled: bool, out: W) -> Self {
        Diagnostics {
            enabled,
            out,
            style: Style::new().force_styling(false),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Writes one `sift: ...` line when enabled.
    pub fn note(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let line = format!("sift: {}", message.as_ref());
        writeln!(self.out, "{}", self.style.apply_to(line))
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_writes_nothing() {
        let mut diag = Diagnostics::new(false, Vec::new());
        diag.note("hidden").unwrap();
        assert!(diag.into_inner().is_empty());
    }

    #[test]
    fn enabled_prefixes_lines() {
        let mut diag = Diagnostics::new(true, Vec::new());
        assert!(diag.is_enabled());
        diag.note("3 products").unwrap();
        diag.note(String::from("done")).unwrap();
        let text = String::from_utf8(diag.into_inner()).unwrap();
        assert_eq!(text, "sift: 3 products\nsift: done\n");
    }
}
