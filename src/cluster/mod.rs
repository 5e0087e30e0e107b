//! Optimal clustering of scalar data.
//!
//! ## Why one dimension is special
//!
//! k-means in general is NP-hard, and the usual Lloyd iterations only find a
//! local optimum that depends on the seeding. On the real line, however, every
//! optimal cluster is an interval of the sorted data. That structure makes the
//! problem solvable *exactly* by dynamic programming.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} (x - μ_k)²
//! ```
//!
//! ## Ckmeans
//!
//! Three stages, each feeding the next:
//!
//! 1. Sort the input and check the cluster count. If only one distinct value
//!    is present, return it as a single group.
//! 2. Fill a `k × n` cost matrix (least SSD for each prefix and group count)
//!    together with a backtrack matrix of where the last group starts.
//! 3. Walk the backtrack matrix from the bottom-right corner to emit the groups.
//!
//! **When to use**: class breaks for choropleth maps, bucketing a histogram,
//! splitting latencies or prices into natural tiers; anywhere you want
//! reproducible, globally optimal 1D groups rather than a heuristic.
//!
//! **Cost**: O(k·n²) time, O(k·n) space. Fine for thousands of points.
//!
//! ## Usage
//!
//! ```rust
//! use ckmeans::cluster::{Ckmeans, Clustering};
//!
//! let data = [0.0, 1.0, 2.0, 100.0, 101.0, 103.0];
//!
//! let groups = Ckmeans::new(2).cluster(&data).unwrap();
//! assert_eq!(groups, vec![vec![0.0, 1.0, 2.0], vec![100.0, 101.0, 103.0]]);
//!
//! // One label per input value, in input order.
//! let labels = Ckmeans::new(2).fit_predict(&[101.0, 0.0, 2.0]).unwrap();
//! assert_eq!(labels, vec![1, 0, 0]);
//! ```

mod ckmeans;
mod traits;
mod util;

pub use ckmeans::{ckmeans, clustering_cost, Ckmeans, CkmeansFit};
pub use traits::Clustering;
pub use util::sum_squared_deviations;
