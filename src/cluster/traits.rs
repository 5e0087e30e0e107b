use crate::error::Result;

/// Common interface for hard clustering of scalar data (one label per value).
pub trait Clustering {
    /// Fit the model and return one cluster label per input value, in input order.
    fn fit_predict(&self, data: &[f64]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}
