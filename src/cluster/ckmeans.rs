//! Ckmeans: optimal k-means clustering in one dimension.
//!
//! # The Algorithm (Wang & Song, 2011)
//!
//! In one dimension, every optimal k-means clustering is a partition of the
//! *sorted* values into contiguous runs. That turns the (NP-hard in general)
//! k-means objective into a shortest-path style dynamic program:
//!
//! ```text
//! M[c][i] = min_{c <= j <= i}  M[c-1][j-1] + SSD(x_j ..= x_i)
//! ```
//!
//! where `M[c][i]` is the least total SSD achievable by splitting the first
//! `i + 1` sorted values into `c + 1` groups. A companion matrix `B[c][i]`
//! remembers the `j` that achieved the minimum, i.e. where the last group
//! starts. Walking `B` back from `(k-1, n-1)` recovers the clustering.
//!
//! ## Complexity
//!
//! - **Time**: O(k·n²).
//! - **Space**: O(k·n) for the two matrices.
//!
//! ## Reference
//!
//! Wang, H. & Song, M. (2011). "Ckmeans.1d.dp: Optimal k-means Clustering in
//! One Dimension by Dynamic Programming." The R Journal 3(2).

use super::traits::Clustering;
use super::util::{sum_squared_deviations, Grid, SsdAccumulator};
use crate::error::{Error, Result};
use log::{debug, trace};
use std::ops::Range;

/// Optimal 1D k-means clusterer.
#[derive(Debug, Clone)]
pub struct Ckmeans {
    k: usize,
}

/// Result of an optimal 1D clustering.
#[derive(Debug, Clone, PartialEq)]
pub struct CkmeansFit {
    /// Groups in ascending order, each sorted ascending.
    pub clusters: Vec<Vec<f64>>,
    /// Total within-group sum of squared deviations.
    pub cost: f64,
}

impl CkmeansFit {
    /// Number of groups.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// True when there are no groups.
    ///
    /// A successful fit always has at least one group.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Mean of each group.
    pub fn centers(&self) -> Vec<f64> {
        self.clusters
            .iter()
            .map(|g| g.iter().sum::<f64>() / g.len() as f64)
            .collect()
    }

    /// Largest value of each group (class upper bounds).
    pub fn breaks(&self) -> Vec<f64> {
        self.clusters
            .iter()
            .filter_map(|g| g.last().copied())
            .collect()
    }
}

impl Ckmeans {
    /// Create a clusterer producing `k` groups.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Set the number of groups.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Partition `values` into `k` contiguous groups minimizing total SSD.
    pub fn cluster(&self, values: &[f64]) -> Result<Vec<Vec<f64>>> {
        Ok(self.fit(values)?.clusters)
    }

    /// Like [`Ckmeans::cluster`], but also reports the optimal cost.
    pub fn fit(&self, values: &[f64]) -> Result<CkmeansFit> {
        let sorted = Sorted::new(values, self.k)?;
        let (ranges, cost) = sorted.solve(self.k);
        let clusters = ranges
            .into_iter()
            .map(|r| sorted.values[r].to_vec())
            .collect();
        Ok(CkmeansFit { clusters, cost })
    }
}

impl Clustering for Ckmeans {
    fn fit_predict(&self, data: &[f64]) -> Result<Vec<usize>> {
        let sorted = Sorted::new(data, self.k)?;
        let (ranges, _) = sorted.solve(self.k);

        let mut labels = vec![0usize; data.len()];
        for (label, range) in ranges.into_iter().enumerate() {
            for &orig in &sorted.order[range] {
                labels[orig] = label;
            }
        }
        Ok(labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Partition `values` into `k` contiguous groups minimizing total SSD.
///
/// If every value is identical, a single group is returned regardless of `k`.
///
/// ```rust
/// let groups = ckmeans::ckmeans(&[0.0, 3.0, 4.0], 2).unwrap();
/// assert_eq!(groups, vec![vec![0.0], vec![3.0, 4.0]]);
/// ```
pub fn ckmeans(values: &[f64], k: usize) -> Result<Vec<Vec<f64>>> {
    Ckmeans::new(k).cluster(values)
}

/// Validated, ascending copy of the input.
struct Sorted {
    values: Vec<f64>,
    /// `order[s]` is the caller's index of `values[s]`.
    order: Vec<usize>,
    distinct: usize,
}

impl Sorted {
    fn new(values: &[f64], k: usize) -> Result<Self> {
        let n = values.len();
        if k == 0 || k > n {
            return Err(Error::InvalidClusterCount {
                requested: k,
                n_items: n,
            });
        }
        if let Some(index) = values.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteValue { index });
        }

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
        let values: Vec<f64> = order.iter().map(|&i| values[i]).collect();
        let distinct = 1 + values.windows(2).filter(|w| w[0] != w[1]).count();

        Ok(Self {
            values,
            order,
            distinct,
        })
    }

    /// Ranges into `self.values`, one per group, plus the total cost.
    fn solve(&self, k: usize) -> (Vec<Range<usize>>, f64) {
        let n = self.values.len();
        debug!("ckmeans: n={n}, k={k}, distinct={}", self.distinct);

        if self.distinct == 1 {
            debug!("ckmeans: single distinct value, returning one group");
            let whole = 0..n;
            return (vec![whole], 0.0);
        }

        let matrix = CostMatrix::build(&self.values, k);
        let cost = matrix.total_cost();
        debug!("ckmeans: optimal cost {cost}");
        (matrix.backtrack(), cost)
    }
}

/// Filled DP tables: `cost[(c, i)]` and `backtrack[(c, i)]`.
///
/// Cells with `i < c` are unreachable and left at zero.
struct CostMatrix {
    cost: Grid<f64>,
    backtrack: Grid<usize>,
}

impl CostMatrix {
    fn build(sorted: &[f64], k: usize) -> Self {
        let n = sorted.len();
        let mut cost = Grid::new(k, n, 0.0f64);
        let mut backtrack = Grid::new(k, n, 0usize);

        // Row 0: one group covering each prefix.
        let mut acc = SsdAccumulator::new();
        for (i, &x) in sorted.iter().enumerate() {
            acc.push(x);
            cost[(0, i)] = acc.ssd();
        }
        trace!("ckmeans: row 0 done");

        for c in 1..k {
            for i in c..n {
                let mut acc = SsdAccumulator::new();
                let mut best = 0.0f64;
                let mut best_j = i;

                // Last group is [j, i]; j walks down so the accumulator grows left.
                for j in (c..=i).rev() {
                    acc.push(sorted[j]);
                    let prior = if j > 0 { cost[(c - 1, j - 1)] } else { 0.0 };
                    let candidate = acc.ssd() + prior;

                    // Ties keep the later split, except j == 0 wins ties.
                    let take = if j == i {
                        true
                    } else if j == 0 {
                        candidate <= best
                    } else {
                        candidate < best
                    };
                    if take {
                        best = candidate;
                        best_j = j;
                    }
                }

                cost[(c, i)] = best;
                backtrack[(c, i)] = best_j;
            }
            trace!("ckmeans: row {c} done");
        }

        Self { cost, backtrack }
    }

    fn total_cost(&self) -> f64 {
        self.cost[(self.cost.rows() - 1, self.cost.cols() - 1)]
    }

    /// Trace `backtrack` from `(k-1, n-1)` into one range per group.
    fn backtrack(&self) -> Vec<Range<usize>> {
        let k = self.backtrack.rows();
        let mut ranges = vec![0..0; k];
        let mut right = self.backtrack.cols() - 1;

        for cluster in (0..k).rev() {
            let left = self.backtrack[(cluster, right)];
            ranges[cluster] = left..right + 1;
            if cluster > 0 {
                right = left - 1;
            }
        }
        ranges
    }
}

/// Total SSD of a clustering, summing each group's own SSD.
pub fn clustering_cost(clusters: &[Vec<f64>]) -> f64 {
    clusters.iter().map(|g| sum_squared_deviations(g)).sum()
}
