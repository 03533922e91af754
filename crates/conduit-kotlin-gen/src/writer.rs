// Copyright (c) Conduit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Line-based writer for generating Kotlin code with proper indentation.

use std::fmt::Write;

/// Writer context for generating Kotlin code. Tracks indentation and applies
/// it at the start of every non-empty line.
pub struct KotlinWriter<W: Write> {
    out: W,
    indent: usize,
    at_line_start: bool,
}

impl<W: Write> KotlinWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            indent: 0,
            at_line_start: true,
        }
    }

    /// Write a string, applying indentation at line starts.
    pub fn write(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                writeln!(self.out).unwrap();
                self.at_line_start = true;
            } else {
                if self.at_line_start {
                    for _ in 0..self.indent {
                        write!(self.out, "  ").unwrap();
                    }
                }
                self.at_line_start = false;
                write!(self.out, "{}", c).unwrap();
            }
        }
    }

    /// Write a complete line (adds newline at end).
    pub fn line(&mut self, s: &str) {
        self.write(s);
        self.write("\n");
    }

    /// Write an empty line.
    pub fn newline(&mut self) {
        self.write("\n");
    }

    /// Increase indentation for subsequent lines.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation for subsequent lines.
    pub fn dedent(&mut self) {
        if self.indent > 0 {
            self.indent -= 1;
        }
    }

    /// Get the underlying writer (consumes self).
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render to a string.
pub fn render_to_string<F>(f: F) -> String
where
    F: FnOnce(&mut KotlinWriter<String>),
{
    let mut writer = KotlinWriter::new(String::new());
    f(&mut writer);
    writer.into_inner()
}
