//! Trains a pocket classifier on a small iris subset and classifies two new flowers.
//!
//! Run with `POCKET_LOG=debug cargo run --example iris_pocket` to see each pass.

use pocket_perceptron::PocketClassifier;
use tracing_subscriber::EnvFilter;

fn main() -> pocket_perceptron::Result<()> {
    let filter = EnvFilter::try_from_env("POCKET_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    let samples = vec![
        vec![5.1, 3.5, 1.4, 0.2],
        vec![4.9, 3.0, 1.4, 0.2],
        vec![4.7, 3.2, 1.3, 0.2],
        vec![4.6, 3.1, 1.5, 0.2],
        vec![5.0, 3.6, 1.4, 0.2],
        vec![5.4, 3.9, 1.7, 0.4],
        vec![7.0, 3.2, 4.7, 1.4],
        vec![6.4, 3.2, 4.5, 1.5],
        vec![6.9, 3.1, 4.9, 1.5],
        vec![5.5, 2.3, 4.0, 1.3],
        vec![6.5, 2.8, 4.6, 1.5],
        vec![5.7, 2.8, 4.5, 1.3],
    ];
    let labels = vec![
        "setosa", "setosa", "setosa", "setosa", "setosa", "setosa",
        "versicolor", "versicolor", "versicolor", "versicolor", "versicolor", "versicolor",
    ];

    let mut classifier = PocketClassifier::new(4, ("setosa", "versicolor"))?;
    classifier.train(&samples, &labels, None)?;

    println!("weights:            {:?}", classifier.weights());
    println!("pocket weights:     {:?}", classifier.pocket().best_weights());
    println!("misclassify record: {:?}", classifier.misclassify_record());

    let new_data = vec![vec![6.3, 3.3, 4.7, 1.6], vec![4.6, 3.4, 1.4, 0.3]];
    println!("predictions:        {:?}", classifier.classify(&new_data)?);
    Ok(())
}
