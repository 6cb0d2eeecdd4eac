use crate::cf::types::error::{CfError, Result};
use crate::cf::types::models::Element;
use crate::cf::types::options::{DecodeOptions, DEFAULT_MAX_TEXT_DEPTH};

use super::scanner::Scanner;

/// Path-addressable index over structural text.
///
/// Built once from a borrowed source; queries return slices of that source.
/// The first element is the document root. A path is a sequence of 1-based
/// sibling positions, each step descending into the current composite:
///
/// ```text
/// {a,b,{c,d},e}
/// read(&[])     -> {a,b,{c,d},e}
/// read(&[3])    -> {c,d}
/// read(&[3, 2]) -> d
/// ```
#[derive(Debug, Clone)]
pub struct StructuralIndex<'a> {
    source: &'a str,
    elements: Vec<Element>,
}

impl<'a> StructuralIndex<'a> {
    /// Index `source` with the default nesting limit.
    ///
    /// # Errors
    /// - [`CfError::MalformedText`] on an unclosed brace or quote
    /// - [`CfError::NestingTooDeep`] past the nesting limit
    pub fn build(source: &'a str) -> Result<Self> {
        Self::build_with_depth(source, DEFAULT_MAX_TEXT_DEPTH)
    }

    pub fn build_with(source: &'a str, options: &DecodeOptions) -> Result<Self> {
        Self::build_with_depth(source, options.max_text_depth)
    }

    pub fn build_with_depth(source: &'a str, max_depth: usize) -> Result<Self> {
        let elements = Scanner::new(source, max_depth).scan()?;
        Ok(Self { source, elements })
    }

    /// The whole indexed text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The flat element arena, in scan (pre-order) order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the text of the element at `path`, braces included for a
    /// composite.
    ///
    /// # Errors
    /// [`CfError::PathOutOfRange`] if a step addresses a missing sibling or
    /// descends into a scalar.
    pub fn read(&self, path: &[usize]) -> Result<&'a str> {
        let index = self.resolve(path)?;
        self.slice(&self.elements[index])
    }

    /// Returns the element at `path`.
    pub fn element(&self, path: &[usize]) -> Result<&Element> {
        let index = self.resolve(path)?;
        Ok(&self.elements[index])
    }

    pub fn is_composite(&self, path: &[usize]) -> Result<bool> {
        Ok(self.element(path)?.is_composite())
    }

    /// Number of children of the composite at `path` (zero for a scalar).
    pub fn child_count(&self, path: &[usize]) -> Result<usize> {
        Ok(self.children(path)?.count())
    }

    /// Iterates over the texts of the children of the composite at `path`.
    pub fn children(&self, path: &[usize]) -> Result<Children<'_, 'a>> {
        let index = self.resolve(path)?;
        let parent = &self.elements[index];
        let (cursor, end) = if parent.is_composite() {
            (index + 1, parent.next)
        } else {
            (parent.next, parent.next)
        };
        Ok(Children {
            index: self,
            cursor,
            end,
        })
    }

    /// Walks `path` over sibling links and returns the addressed slot.
    fn resolve(&self, path: &[usize]) -> Result<usize> {
        let out_of_range = |depth: usize| CfError::PathOutOfRange {
            path: path.to_vec(),
            depth,
        };

        if self.elements.is_empty() {
            return Err(out_of_range(0));
        }

        let mut current = 0usize;
        for (depth, &position) in path.iter().enumerate() {
            let parent = &self.elements[current];
            if !parent.is_composite() || position == 0 {
                return Err(out_of_range(depth));
            }

            let mut child = current + 1;
            let mut remaining = position;
            loop {
                if child >= parent.next {
                    return Err(out_of_range(depth));
                }
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
                child = self.elements[child].next;
            }
            current = child;
        }
        Ok(current)
    }

    fn slice(&self, element: &Element) -> Result<&'a str> {
        self.source
            .get(element.begin..element.end)
            .ok_or(CfError::MalformedText {
                position: element.begin,
                detail: "element does not fall on character boundaries",
            })
    }
}

/// Iterator over the child texts of one composite.
///
/// Created by [`StructuralIndex::children()`].
pub struct Children<'i, 'a> {
    index: &'i StructuralIndex<'a>,
    cursor: usize,
    end: usize,
}

impl<'i, 'a> Iterator for Children<'i, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }
        let element = &self.index.elements[self.cursor];
        self.cursor = element.next;
        // Offsets come from ASCII delimiters, so they are char boundaries.
        let source: &'a str = self.index.source;
        Some(&source[element.begin..element.end])
    }
}
