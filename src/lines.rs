//! Line framing for the decoder.
//!
//! TOON is a line-oriented grammar: structure is carried entirely by the
//! depth of each line's leading indentation. This module turns a raw
//! document into a sequence of [`Frame`]s — `(depth, content, line number)`
//! triples — and exposes a peek/advance cursor over them.
//!
//! CR and CRLF line endings are accepted and collapsed to LF. A single
//! trailing empty line (the usual final newline) is discarded. Blank lines
//! are kept as frames so the decoder can enforce the strict-mode rule
//! against blank lines inside array bodies.

use crate::error::{DecodeError, Result};
use crate::ToonOptions;

/// One framed line: its indentation depth, its content with the indent
/// stripped, and its 1-based position in the source.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub depth: usize,
    pub content: String,
    pub number: usize,
    pub blank: bool,
}

/// A peek/advance cursor over the framed document.
#[derive(Debug)]
pub(crate) struct Frames {
    frames: Vec<Frame>,
    pos: usize,
}

impl Frames {
    /// Frames a raw document according to the indentation options.
    pub fn frame(input: &str, options: &ToonOptions) -> Result<Self> {
        let normalized = normalize_newlines(input);
        let mut raw: Vec<&str> = normalized.split('\n').collect();
        if raw.last() == Some(&"") {
            raw.pop();
        }

        let mut frames = Vec::with_capacity(raw.len());
        for (idx, line) in raw.iter().enumerate() {
            let number = idx + 1;
            if line.trim().is_empty() {
                frames.push(Frame {
                    depth: 0,
                    content: String::new(),
                    number,
                    blank: true,
                });
                continue;
            }
            let (depth, content) = frame_line(line, number, options)?;
            frames.push(Frame {
                depth,
                content,
                number,
                blank: false,
            });
        }
        Ok(Frames { frames, pos: 0 })
    }

    /// The next frame without consuming it.
    pub fn peek(&self) -> Option<&Frame> {
        self.frames.get(self.pos)
    }

    /// The frame `n` positions ahead of the cursor.
    pub fn peek_ahead(&self, n: usize) -> Option<&Frame> {
        self.frames.get(self.pos + n)
    }

    /// The next non-blank frame at or after the cursor.
    pub fn peek_non_blank(&self) -> Option<&Frame> {
        self.frames[self.pos..].iter().find(|f| !f.blank)
    }

    /// Consumes and returns the next frame.
    pub fn advance(&mut self) -> Option<&Frame> {
        let frame = self.frames.get(self.pos)?;
        self.pos += 1;
        Some(frame)
    }

    /// Consumes blank frames until the next content frame.
    pub fn skip_blank(&mut self) {
        while matches!(self.peek(), Some(f) if f.blank) {
            self.pos += 1;
        }
    }

    /// 1-based line number of the frame under the cursor, or of the last
    /// line when the cursor is at the end.
    pub fn current_line(&self) -> usize {
        self.frames
            .get(self.pos)
            .or_else(|| self.frames.last())
            .map_or(0, |f| f.number)
    }
}

fn normalize_newlines(input: &str) -> String {
    if input.contains('\r') {
        input.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        input.to_string()
    }
}

/// Measures one non-blank line: validates the indent run and splits it off.
fn frame_line(line: &str, number: usize, options: &ToonOptions) -> Result<(usize, String)> {
    let mut spaces = 0usize;
    let mut offset = 0usize;
    for c in line.chars() {
        match c {
            ' ' => spaces += 1,
            '\t' => {
                if options.strict {
                    return Err(DecodeError::new(
                        "Invalid indentation: tab character in indent",
                        number,
                    ));
                }
                // Lenient reading: a tab weighs one space.
                spaces += 1;
            }
            _ => break,
        }
        offset += c.len_utf8();
    }

    // The builder clamps `indent`, but the field is public.
    let step = options.indent.max(1);
    if options.strict && spaces % step != 0 {
        return Err(DecodeError::new(
            format!(
                "Invalid indentation: {} spaces is not a multiple of {}",
                spaces, step
            ),
            number,
        ));
    }

    Ok((spaces / step, line[offset..].to_string()))
}
