use std::ops::{Index, IndexMut};

/// Dense row-major 2D array, allocated once and indexed by `(row, col)`.
#[derive(Clone, Debug)]
pub(crate) struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub(crate) fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

/// Running mean and sum of squared deviations, updated one value at a time.
///
/// With `m` values seen after a push of `x`:
///
/// ```text
/// S_m = S_{m-1} + ((m - 1) / m) * (x - μ_{m-1})²
/// μ_m = ((m - 1) * μ_{m-1} + x) / m
/// ```
///
/// The count is at least 1 whenever it is used as a divisor.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SsdAccumulator {
    count: usize,
    mean: f64,
    ssd: f64,
}

impl SsdAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, x: f64) {
        self.count += 1;
        let m = self.count as f64;
        let d = x - self.mean;
        self.ssd += ((m - 1.0) / m) * d * d;
        self.mean = ((m - 1.0) * self.mean + x) / m;
    }

    #[inline]
    pub(crate) fn ssd(&self) -> f64 {
        self.ssd
    }
}

/// Sum of squared deviations of `values` from their mean.
///
/// Computed in two passes (mean, then deviations). Returns 0 for empty input.
pub fn sum_squared_deviations(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum()
}
