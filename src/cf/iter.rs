//! Iterator for sequential access to container rows.

use std::vec::IntoIter;

use super::reader::Container;
use super::types::error::Result;
use super::types::models::{Row, RowPointer};

/// Iterator over the rows of a container, in pointer-table order.
///
/// Yields `Result<Row>`; a corrupted row surfaces as an `Err` item without
/// stopping the iterator, so callers that want all-or-nothing semantics
/// collect into `Result<Vec<_>>`.
///
/// Created by [`Container::rows()`](crate::cf::reader::Container::rows).
pub struct RowIterator<'a> {
    container: Container<'a>,
    pointers: IntoIter<RowPointer>,
}

impl<'a> RowIterator<'a> {
    pub(super) fn new(container: Container<'a>, pointers: Vec<RowPointer>) -> Self {
        Self {
            container,
            pointers: pointers.into_iter(),
        }
    }
}

impl<'a> Iterator for RowIterator<'a> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let pointer = self.pointers.next()?;
        Some(self.container.read_row(pointer))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pointers.size_hint()
    }
}

impl ExactSizeIterator for RowIterator<'_> {}
