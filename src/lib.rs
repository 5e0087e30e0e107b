//! Optimal one-dimensional k-means.
//!
//! `ckmeans` partitions a set of real numbers into `k` contiguous groups with
//! the smallest possible total sum of squared deviations. Unlike Lloyd-style
//! k-means the answer is exact and deterministic.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`ckmeans()`] (free function) and the [`Ckmeans`] builder
//! - [`CkmeansFit`] (groups plus optimal cost)
//! - the [`Clustering`] trait for per-value labels

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    ckmeans, clustering_cost, sum_squared_deviations, Ckmeans, CkmeansFit, Clustering,
};
pub use error::{Error, Result};
