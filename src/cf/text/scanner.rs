//! Recursive-descent scanner producing the flat element arena.

use log::warn;

use crate::cf::types::error::{CfError, Result};
use crate::cf::types::models::{Element, ElementKind};

/// What the current level has seen since its last element boundary.
#[derive(Debug, Clone, Copy)]
enum Run {
    /// Nothing consumed yet on this level.
    Idle,
    /// A scalar is accumulating from `begin`.
    Scalar { begin: usize },
    /// A composite just closed; a following comma is a pure separator.
    AfterComposite,
}

pub(super) struct Scanner<'s> {
    bytes: &'s [u8],
    pos: usize,
    max_depth: usize,
    elements: Vec<Element>,
}

impl<'s> Scanner<'s> {
    pub(super) fn new(source: &'s str, max_depth: usize) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
            max_depth,
            elements: Vec::with_capacity(256),
        }
    }

    pub(super) fn scan(mut self) -> Result<Vec<Element>> {
        self.scan_level(0)?;
        if self.pos < self.bytes.len() {
            warn!(
                "Unmatched '}}' at byte {}; ignoring the remaining {} bytes",
                self.pos,
                self.bytes.len() - self.pos
            );
        }
        Ok(self.elements)
    }

    /// Scans one nesting level. Returns with the cursor on the `}` that ends
    /// the level, or at the end of input.
    fn scan_level(&mut self, depth: usize) -> Result<()> {
        let mut run = Run::Idle;

        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'{' => {
                    self.scan_composite(depth)?;
                    run = Run::AfterComposite;
                }
                b'}' => break,
                b'"' => {
                    if !matches!(run, Run::Scalar { .. }) {
                        run = Run::Scalar { begin: self.pos };
                    }
                    self.skip_quoted()?;
                }
                b',' => {
                    match run {
                        Run::Idle => self.push_scalar(self.pos, self.pos),
                        Run::Scalar { begin } => self.push_scalar(begin, self.pos),
                        Run::AfterComposite => {}
                    }
                    run = Run::Scalar { begin: self.pos + 1 };
                }
                _ => {
                    if !matches!(run, Run::Scalar { .. }) {
                        run = Run::Scalar { begin: self.pos };
                    }
                }
            }
            self.pos += 1;
        }

        // An untouched level (`{}` or empty input) has no elements at all.
        if let Run::Scalar { begin } = run {
            self.push_scalar(begin, self.pos);
        }
        Ok(())
    }

    /// Scans a composite whose `{` is under the cursor, leaving the cursor on
    /// its matching `}`.
    fn scan_composite(&mut self, depth: usize) -> Result<()> {
        if depth >= self.max_depth {
            return Err(CfError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        let open = self.pos;
        let slot = self.elements.len();
        self.elements.push(Element {
            kind: ElementKind::Composite,
            begin: open,
            end: open,
            next: slot + 1,
        });

        self.pos += 1;
        self.scan_level(depth + 1)?;
        if self.pos >= self.bytes.len() {
            return Err(CfError::MalformedText {
                position: open,
                detail: "unclosed '{'",
            });
        }

        let next = self.elements.len();
        let element = &mut self.elements[slot];
        element.end = self.pos + 1;
        element.next = next;
        Ok(())
    }

    /// Moves the cursor from an opening quote to its closing quote.
    ///
    /// No escape sequences exist; a doubled quote simply closes and reopens.
    fn skip_quoted(&mut self) -> Result<()> {
        let open = self.pos;
        match self.bytes[open + 1..].iter().position(|&b| b == b'"') {
            Some(offset) => {
                self.pos = open + 1 + offset;
                Ok(())
            }
            None => Err(CfError::MalformedText {
                position: open,
                detail: "unterminated quoted value",
            }),
        }
    }

    fn push_scalar(&mut self, begin: usize, end: usize) {
        let index = self.elements.len();
        self.elements.push(Element {
            kind: ElementKind::Scalar,
            begin,
            end,
            next: index + 1,
        });
    }
}
