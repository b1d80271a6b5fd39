//! Owned single-channel 8-bit sample grid in row-major layout.
//!
//! A [`Plane`] holds one colour component (red, green or blue) or the sole
//! gray channel of an image. Storage is a single contiguous `Vec<u8>` with
//! `rows * cols` samples; each row is addressable as a slice.

use crate::codec::CodecError;

/// A `rows`×`cols` grid of 8-bit samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl Plane {
    /// Allocate a zero-filled plane.
    ///
    /// Zero-sized planes are valid. Fails with [`CodecError::Allocation`] when
    /// `rows * cols` overflows or the allocator refuses the request.
    pub fn new(rows: usize, cols: usize) -> Result<Self, CodecError> {
        let mut data = Self::reserve(rows, cols)?;
        data.resize(rows * cols, 0);
        Ok(Self { rows, cols, data })
    }

    /// Reserve room for a `rows`×`cols` plane without touching it.
    ///
    /// Samples are pushed as they are decoded, so only data that actually
    /// arrives is ever written. Fails like [`Plane::new`].
    pub(crate) fn reserve(rows: usize, cols: usize) -> Result<Vec<u8>, CodecError> {
        let len = rows.checked_mul(cols).ok_or(CodecError::Allocation { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| CodecError::Allocation { rows, cols })?;
        Ok(data)
    }

    /// Wrap fully decoded samples.
    pub(crate) fn from_samples(rows: usize, cols: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(Some(data.len()), rows.checked_mul(cols));
        Self { rows, cols, data }
    }

    /// Build a plane from row-major samples.
    ///
    /// Returns `None` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<u8>) -> Option<Self> {
        (rows.checked_mul(cols)? == data.len()).then_some(Self { rows, cols, data })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "sample ({row}, {col}) out of bounds for {}x{} plane",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Sample at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[self.idx(row, col)]
    }

    /// Overwrite the sample at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        let i = self.idx(row, col);
        self.data[i] = value;
    }

    /// Borrow one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// All samples in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// All samples in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
