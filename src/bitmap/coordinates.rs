use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Visits every coordinate of a `width` x `height` grid exactly once,
/// row by row from the top, each row from left to right.
#[derive(Clone, Debug)]
pub struct RowMajorCoordinates {
    width: u32,
    height: u32,
    column_index: u32,
    row_index: u32,
}

impl RowMajorCoordinates {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            column_index: 0,
            row_index: 0,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.width == 0 || self.row_index >= self.height
    }

    fn remaining(&self) -> u64 {
        if self.is_exhausted() {
            return 0;
        }
        let remaining_rows = (self.height - self.row_index) as u64;
        remaining_rows * self.width as u64 - self.column_index as u64
    }
}

impl Iterator for RowMajorCoordinates {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let coordinate = Coordinate::new(self.column_index, self.row_index);
        self.column_index += 1;
        if self.column_index == self.width {
            self.column_index = 0;
            self.row_index += 1;
        }
        Some(coordinate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for RowMajorCoordinates {}

impl FusedIterator for RowMajorCoordinates {}
