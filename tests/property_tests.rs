use ckmeans::cluster::{ckmeans, clustering_cost, sum_squared_deviations, Ckmeans, Clustering};
use ckmeans::Error;
use proptest::prelude::*;

/// Least total SSD over every split of `sorted` into `k` contiguous, non-empty runs.
fn brute_force_cost(sorted: &[f64], k: usize) -> f64 {
    if k == 1 {
        return sum_squared_deviations(sorted);
    }
    // Last run is sorted[j..]; the first j values must hold k - 1 runs.
    (k - 1..sorted.len())
        .map(|j| brute_force_cost(&sorted[..j], k - 1) + sum_squared_deviations(&sorted[j..]))
        .fold(f64::INFINITY, f64::min)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

fn all_equal(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Small integer-valued inputs with a valid `k`.
fn values_and_k(max_len: usize) -> impl Strategy<Value = (Vec<f64>, usize)> {
    prop::collection::vec(-1000i32..1000, 1..=max_len).prop_flat_map(|v| {
        let n = v.len();
        let values: Vec<f64> = v.into_iter().map(f64::from).collect();
        (Just(values), 1..=n)
    })
}

#[test]
fn test_brute_force_oracle_known_values() {
    assert_eq!(brute_force_cost(&[0.0, 3.0, 4.0], 2), 0.5);
    assert_eq!(brute_force_cost(&[1.0, 2.0, 3.0], 3), 0.0);
    assert_eq!(brute_force_cost(&[1.0, 3.0], 1), 2.0);
}

#[test]
fn test_empty_input_rejected() {
    assert!(matches!(
        ckmeans(&[], 10),
        Err(Error::InvalidClusterCount { requested: 10, n_items: 0 })
    ));
}

proptest! {
    #[test]
    fn prop_cost_matches_brute_force((values, k) in values_and_k(8)) {
        let groups = ckmeans(&values, k).unwrap();
        let got = clustering_cost(&groups);
        let best = brute_force_cost(&sorted(&values), k);
        prop_assert!(
            (got - best).abs() <= 1e-6 * (1.0 + best),
            "ckmeans({:?}, {}) = {:?}; {} != {}", values, k, groups, got, best
        );
    }

    #[test]
    fn prop_reported_cost_matches_groups((values, k) in values_and_k(12)) {
        let fit = Ckmeans::new(k).fit(&values).unwrap();
        let recomputed = clustering_cost(&fit.clusters);
        prop_assert!((fit.cost - recomputed).abs() <= 1e-6 * (1.0 + recomputed));
    }

    #[test]
    fn prop_groups_cover_sorted_input((values, k) in values_and_k(20)) {
        let groups = ckmeans(&values, k).unwrap();
        prop_assert!(groups.iter().all(|g| !g.is_empty()));
        let flat: Vec<f64> = groups.concat();
        prop_assert_eq!(flat, sorted(&values));
    }

    #[test]
    fn prop_group_count((values, k) in values_and_k(20)) {
        let groups = ckmeans(&values, k).unwrap();
        if all_equal(&values) {
            prop_assert_eq!(groups.len(), 1);
        } else {
            prop_assert_eq!(groups.len(), k);
        }
    }

    #[test]
    fn prop_k_equals_n_gives_singletons(
        values in prop::collection::vec(-1000i32..1000, 1..20)
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        prop_assume!(!all_equal(&values));
        let groups = ckmeans(&values, values.len()).unwrap();
        let expected: Vec<Vec<f64>> = sorted(&values).into_iter().map(|x| vec![x]).collect();
        prop_assert_eq!(groups, expected);
    }

    #[test]
    fn prop_k_one_is_whole_input(values in prop::collection::vec(-1e6f64..1e6, 1..30)) {
        let groups = ckmeans(&values, 1).unwrap();
        prop_assert_eq!(groups, vec![sorted(&values)]);
    }

    #[test]
    fn prop_too_many_clusters_rejected(
        values in prop::collection::vec(-10.0f64..10.0, 0..10),
        extra in 1usize..5
    ) {
        let k = values.len() + extra;
        let is_invalid = matches!(ckmeans(&values, k), Err(Error::InvalidClusterCount { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn prop_labels_agree_with_groups((values, k) in values_and_k(20)) {
        let model = Ckmeans::new(k);
        let labels = model.fit_predict(&values).unwrap();
        let groups = model.cluster(&values).unwrap();

        prop_assert_eq!(labels.len(), values.len());
        for (&x, &l) in values.iter().zip(&labels) {
            prop_assert!(l < groups.len());
            prop_assert!(groups[l].contains(&x));
        }
    }
}
