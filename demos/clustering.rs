//! Ckmeans on a handful of small datasets, checked against known answers.

use ckmeans::{Ckmeans, Clustering, Error};

fn main() {
    let cases: Vec<(Vec<f64>, usize, Vec<Vec<f64>>)> = vec![
        (vec![1.0], 1, vec![vec![1.0]]),
        (vec![0.0, 3.0, 4.0], 2, vec![vec![0.0], vec![3.0, 4.0]]),
        (vec![1.0, 1.0, 1.0, 1.0], 1, vec![vec![1.0, 1.0, 1.0, 1.0]]),
        (
            vec![3.0, 2.0, 3.0, 5.0, 2.0, 1.0],
            3,
            vec![vec![1.0, 2.0, 2.0], vec![3.0, 3.0], vec![5.0]],
        ),
        (
            vec![0.0, 1.0, 2.0, 50.0, 100.0, 101.0, 103.0],
            3,
            vec![vec![0.0, 1.0, 2.0], vec![50.0], vec![100.0, 101.0, 103.0]],
        ),
        (
            vec![-1.0, 2.0, -1.0, 2.0, 4.0, 5.0, 6.0, -1.0, 2.0, -1.0],
            3,
            vec![
                vec![-1.0, -1.0, -1.0, -1.0],
                vec![2.0, 2.0, 2.0],
                vec![4.0, 5.0, 6.0],
            ],
        ),
    ];

    println!("=== Ckmeans ===");
    let mut failures = 0;
    for (values, k, expected) in &cases {
        let fit = Ckmeans::new(*k).fit(values).unwrap();
        let status = if &fit.clusters == expected {
            "ok"
        } else {
            failures += 1;
            "MISMATCH"
        };
        println!(
            "  k={} {:?}\n    => {:?} (cost {:.3}) [{}]",
            k, values, fit.clusters, fit.cost, status
        );
    }

    // Labels come back in input order.
    let data = [100.0, 0.0, 101.0, 1.0, 50.0];
    let labels = Ckmeans::new(3).fit_predict(&data).unwrap();
    println!("\n=== Labels (k=3) ===");
    for (x, label) in data.iter().zip(&labels) {
        println!("  {:6.1} => cluster {}", x, label);
    }

    // More groups than values is rejected up front.
    match Ckmeans::new(10).cluster(&[]) {
        Err(e @ Error::InvalidClusterCount { .. }) => println!("\nempty input: {}", e),
        other => {
            failures += 1;
            println!("\nempty input: unexpected {:?}", other);
        }
    }

    if failures > 0 {
        eprintln!("{} case(s) failed", failures);
        std::process::exit(1);
    }
}
