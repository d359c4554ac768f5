//! Operator-facing status lines: `[*]` info, `[+]` success, `[-]` failure.
//!
//! These go to stderr so stdout stays free for piping.

use std::fmt::Display;
use std::io::{self, Write};

const RST: &str = "\x1b[0m";
const BLU: &str = "\x1b[96m";
const GRN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";

pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl Reporter<io::Stderr> {
    pub fn stderr(color: bool) -> Self {
        Self::new(io::stderr(), color)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn info(&mut self, message: impl Display) {
        self.line(BLU, "[*]", message);
    }

    pub fn success(&mut self, message: impl Display) {
        self.line(GRN, "[+]", message);
    }

    pub fn failure(&mut self, message: impl Display) {
        self.line(RED, "[-]", message);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, color: &str, glyph: &str, message: impl Display) {
        // A closed stderr must not turn a good run into a failed one.
        let _ = if self.color {
            writeln!(self.out, "{color}{glyph}{RST} {message}")
        } else {
            writeln!(self.out, "{glyph} {message}")
        };
    }
}
