//! # Marker Scanner
//!
//! Finds `ErrorEnum => <Name>;<variants>` declarations in arbitrary text.
//!
//! The host source is treated as an opaque character stream: only the marker
//! substring matters, so markers are usually written inside comments:
//!
//! ```text
//! // ErrorEnum => CreateWalletError; SecretKeyError WalletCreationError
//! ```
//!
//! ## Matching Rules
//! - The marker literal is `ErrorEnum => ` (single spaces)
//! - The enum name runs up to the first `;` on the same line and is kept verbatim
//! - The variants portion is the rest of that line, possibly empty
//! - An occurrence without a `;` on its line is not a marker and is skipped silently
//! - Matches never overlap: scanning resumes at the end of the matched line
//!
//! ## Example
//! ```rust
//! use errgen::scanner::scan;
//!
//! let markers: Vec<_> = scan("// ErrorEnum => IoFail; timeout *net::ConnReset\n").collect();
//! assert_eq!(markers.len(), 1);
//! assert_eq!(markers[0].enum_name, "IoFail");
//! assert_eq!(markers[0].raw_variants, " timeout *net::ConnReset");
//! ```

use crate::model::RawMarker;

/// The literal that introduces a declaration
pub const MARKER: &str = "ErrorEnum => ";

/// Lazy scanner over the markers of one input text
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    // byte offset up to which newlines have been counted into `line`
    counted: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            counted: 0,
        }
    }

    fn line_at(&mut self, offset: usize) -> usize {
        self.line += self.input[self.counted..offset]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();
        self.counted = offset;
        self.line
    }

    fn line_end(&self, from: usize) -> usize {
        self.input[from..]
            .find('\n')
            .map_or(self.input.len(), |i| from + i)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = RawMarker<'a>;

    fn next(&mut self) -> Option<RawMarker<'a>> {
        let input = self.input;
        loop {
            let start = self.position + input.get(self.position..)?.find(MARKER)?;
            let body_start = start + MARKER.len();
            let line_end = self.line_end(body_start);
            let body = &input[body_start..line_end];

            // Whether or not this is a marker, nothing else on this line can start one.
            self.position = line_end;

            if let Some(semi) = body.find(';') {
                let line = self.line_at(start);
                return Some(RawMarker {
                    enum_name: &body[..semi],
                    raw_variants: &body[semi + 1..],
                    line,
                });
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Scan `input` for declaration markers, in order of appearance
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}
