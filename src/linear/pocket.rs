//! Pocket binary classifier.
//!
//! The Pocket algorithm runs the perceptron learning rule but keeps the best
//! weight vector seen so far (the "pocket") together with its misclassification
//! count, so training on data that is not linearly separable still yields a
//! usable boundary.
//!
//! ```
//! use pocket_perceptron::PocketClassifier;
//!
//! let samples = vec![
//!     vec![5.1, 3.5, 1.4, 0.2],
//!     vec![4.9, 3.0, 1.4, 0.2],
//!     vec![4.7, 3.2, 1.3, 0.2],
//!     vec![4.6, 3.1, 1.5, 0.2],
//!     vec![5.0, 3.6, 1.4, 0.2],
//!     vec![5.4, 3.9, 1.7, 0.4],
//!     vec![7.0, 3.2, 4.7, 1.4],
//!     vec![6.4, 3.2, 4.5, 1.5],
//!     vec![6.9, 3.1, 4.9, 1.5],
//!     vec![5.5, 2.3, 4.0, 1.3],
//!     vec![6.5, 2.8, 4.6, 1.5],
//!     vec![5.7, 2.8, 4.5, 1.3],
//! ];
//! let labels = vec![-1, -1, -1, -1, -1, -1, 1, 1, 1, 1, 1, 1];
//!
//! let mut classifier = PocketClassifier::new(4, (-1, 1)).unwrap();
//! classifier.train(&samples, &labels, None).unwrap();
//!
//! let new_data = vec![vec![6.3, 3.3, 4.7, 1.6], vec![4.6, 3.4, 1.4, 0.3]];
//! assert_eq!(classifier.classify(&new_data).unwrap(), vec![1, -1]);
//! ```

use num_traits::Float;
use tracing::{debug, info, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BinaryClassifier, LinearModel, validate_training_set};
use crate::common_types::{ClassCode, DataPoint};
use crate::error::{ClassifierError, Result};
use crate::labels::LabelMap;

/// The best weights seen so far and the misclassification count they produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pocket<F> {
    best_weights: Vec<F>,
    /// `None` until the first completed pass.
    misclassify_count: Option<usize>,
}

impl<F: Float> Pocket<F> {
    pub fn new(number_of_attributes: usize) -> Self {
        Pocket {
            best_weights: vec![F::zero(); number_of_attributes + 1],
            misclassify_count: None,
        }
    }

    pub fn best_weights(&self) -> &[F] {
        &self.best_weights
    }

    pub fn misclassify_count(&self) -> Option<usize> {
        self.misclassify_count
    }

    pub fn is_initialized(&self) -> bool {
        self.misclassify_count.is_some()
    }

    /// A pass replaces the pocket when the pocket is empty, when it did
    /// strictly better, or when it was perfect.
    fn should_replace(&self, misclassifies: usize) -> bool {
        match self.misclassify_count {
            None => true,
            Some(count) => misclassifies < count || misclassifies == 0,
        }
    }

    fn store(&mut self, weights: &[F], misclassifies: usize) {
        self.best_weights.clear();
        self.best_weights.extend_from_slice(weights);
        self.misclassify_count = Some(misclassifies);
    }
}

/// Pocket binary classifier.
///
/// The first class label is mapped to `+1` and the second to `-1`.
#[derive(Debug, Clone)]
pub struct PocketClassifier<F, L> {
    model: LinearModel<F>,
    pocket: Pocket<F>,
    misclassify_record: Vec<usize>,
    label_map: LabelMap<L>,
}

impl<F, L> PocketClassifier<F, L> {
    pub const DEFAULT_MAX_ITERATIONS: usize = 10;
}

impl<F, L> PocketClassifier<F, L>
where
    F: Float,
    L: Clone + PartialEq,
{
    pub fn new(number_of_attributes: usize, class_labels: (L, L)) -> Result<Self> {
        if number_of_attributes == 0 {
            return Err(ClassifierError::NoAttributes);
        }
        Ok(PocketClassifier {
            model: LinearModel::zeros(number_of_attributes),
            pocket: Pocket::new(number_of_attributes),
            misclassify_record: Vec::new(),
            label_map: LabelMap::new(class_labels)?,
        })
    }

    /// Trains with the perceptron rule for up to `max_iterations` passes
    /// (`DEFAULT_MAX_ITERATIONS` when `None`), stopping early on a perfect pass.
    ///
    /// The input is validated before any state changes. Calling `train` again
    /// continues from the current weights, pocket and record.
    pub fn train(&mut self, samples: &[Vec<F>], labels: &[L], max_iterations: Option<usize>) -> Result<()> {
        let targets = validate_training_set(&self.model, &self.label_map, samples, labels)?;
        let max_iterations = max_iterations.unwrap_or(Self::DEFAULT_MAX_ITERATIONS);

        for pass in 1..=max_iterations {
            let misclassifies = self.model.learn_pass(samples, &targets);

            if self.pocket.should_replace(misclassifies) {
                trace!(pass, misclassifies, "replacing pocket weights");
                self.pocket.store(self.model.weights(), misclassifies);
            }

            debug!(pass, misclassifies, pocket = ?self.pocket.misclassify_count, "pocket pass complete");

            if misclassifies == 0 {
                info!(passes = pass, "pocket training converged");
                return Ok(());
            }
            // The pocket is always initialized after a completed pass.
            self.misclassify_record.push(self.pocket.misclassify_count.unwrap_or(misclassifies));
        }

        info!(
            passes = max_iterations,
            pocket = ?self.pocket.misclassify_count,
            "pocket training stopped at max iterations"
        );
        Ok(())
    }

    /// Same as [`train`](Self::train) on paired data points.
    pub fn train_points(&mut self, data: &[DataPoint<F, L>], max_iterations: Option<usize>) -> Result<()> {
        let (samples, labels): (Vec<Vec<F>>, Vec<L>) =
            data.iter().map(|dp| (dp.features.clone(), dp.label.clone())).unzip();
        self.train(&samples, &labels, max_iterations)
    }

    /// Classifies each sample using the live training weights.
    ///
    /// Note that this reads the weights left by the last training pass, not
    /// the pocket's best weights. It is kept this way for compatibility, but
    /// it is most likely a latent defect: the pocket exists to surface the
    /// best boundary for final use. Use
    /// [`classify_with_pocket`](Self::classify_with_pocket) for that.
    pub fn classify(&self, new_data: &[Vec<F>]) -> Result<Vec<L>> {
        self.model.check_dimensions(new_data)?;
        Ok(self.decode(self.model.predict_codes(new_data)))
    }

    /// Classifies each sample using the pocket's best weights.
    pub fn classify_with_pocket(&self, new_data: &[Vec<F>]) -> Result<Vec<L>> {
        self.model.check_dimensions(new_data)?;
        let pocket_model = LinearModel::from_weights(self.pocket.best_weights.clone());
        Ok(self.decode(pocket_model.predict_codes(new_data)))
    }

    fn decode(&self, codes: Vec<ClassCode>) -> Vec<L> {
        codes.into_iter().map(|code| self.label_map.label_of(code).clone()).collect()
    }

    pub fn weights(&self) -> &[F] {
        self.model.weights()
    }

    pub fn pocket(&self) -> &Pocket<F> {
        &self.pocket
    }

    pub fn misclassify_record(&self) -> &[usize] {
        &self.misclassify_record
    }

    pub fn number_of_attributes(&self) -> usize {
        self.model.dimension()
    }

    pub fn class_labels(&self) -> (&L, &L) {
        self.label_map.labels()
    }
}

impl<F, L> BinaryClassifier<F, L> for PocketClassifier<F, L>
where
    F: Float,
    L: Clone + PartialEq,
{
    fn train(&mut self, samples: &[Vec<F>], labels: &[L], max_iterations: Option<usize>) -> Result<()> {
        PocketClassifier::train(self, samples, labels, max_iterations)
    }

    fn classify(&self, new_data: &[Vec<F>]) -> Result<Vec<L>> {
        PocketClassifier::classify(self, new_data)
    }

    fn misclassify_record(&self) -> &[usize] {
        &self.misclassify_record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternating() -> (Vec<Vec<f64>>, Vec<&'static str>) {
        (vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]], vec!["a", "b", "a", "b"])
    }

    #[test]
    fn test_new_pocket_is_uninitialized() {
        let classifier = PocketClassifier::<f64, i32>::new(3, (0, 1)).unwrap();
        assert_eq!(classifier.weights(), &[0.0; 4]);
        assert_eq!(classifier.pocket().best_weights(), &[0.0; 4]);
        assert_eq!(classifier.pocket().misclassify_count(), None);
        assert!(!classifier.pocket().is_initialized());
        assert!(classifier.misclassify_record().is_empty());
    }

    #[test]
    fn test_new_rejects_bad_arguments() {
        assert_eq!(
            PocketClassifier::<f64, i32>::new(0, (0, 1)).unwrap_err(),
            ClassifierError::NoAttributes
        );
        assert_eq!(
            PocketClassifier::<f64, &str>::new(2, ("x", "x")).unwrap_err(),
            ClassifierError::DuplicateLabels
        );
    }

    #[test]
    fn test_should_replace_rules() {
        let mut pocket = Pocket::<f64>::new(1);
        assert!(pocket.should_replace(5));
        pocket.store(&[1.0, 1.0], 3);
        assert!(!pocket.should_replace(3));
        assert!(!pocket.should_replace(4));
        assert!(pocket.should_replace(2));
        assert!(pocket.should_replace(0));
        pocket.store(&[0.0, 0.0], 0);
        // A perfect pass always overwrites, even a perfect pocket.
        assert!(pocket.should_replace(0));
    }

    #[test]
    fn test_pocket_keeps_best_not_latest() {
        let (samples, labels) = alternating();
        let mut classifier = PocketClassifier::new(1, ("a", "b")).unwrap();
        classifier.train(&samples, &labels, Some(10)).unwrap();

        assert_eq!(classifier.pocket().misclassify_count(), Some(1));
        assert_eq!(classifier.pocket().best_weights(), &[0.0, -2.0]);
        assert_eq!(classifier.weights(), &[4.0, -4.0]);
        assert_eq!(classifier.misclassify_record(), &[3, 2, 1, 1, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_classify_reads_live_weights() {
        let (samples, labels) = alternating();
        let mut classifier = PocketClassifier::new(1, ("a", "b")).unwrap();
        classifier.train(&samples, &labels, Some(10)).unwrap();

        // live: 4 - 4x, pocket: -2x
        assert_eq!(classifier.classify(&samples).unwrap(), vec!["a", "a", "b", "b"]);
        assert_eq!(classifier.classify_with_pocket(&samples).unwrap(), vec!["a", "b", "b", "b"]);
    }

    #[test]
    fn test_zero_iterations_leaves_pocket_empty() {
        let (samples, labels) = alternating();
        let mut classifier = PocketClassifier::new(1, ("a", "b")).unwrap();
        classifier.train(&samples, &labels, Some(0)).unwrap();
        assert!(!classifier.pocket().is_initialized());
        assert_eq!(classifier.weights(), &[0.0, 0.0]);
        assert!(classifier.misclassify_record().is_empty());
    }

    #[test]
    fn test_empty_training_set_converges_immediately() {
        let mut classifier = PocketClassifier::<f64, i32>::new(2, (1, 2)).unwrap();
        classifier.train(&[], &[], None).unwrap();
        assert_eq!(classifier.pocket().misclassify_count(), Some(0));
        assert_eq!(classifier.pocket().best_weights(), &[0.0, 0.0, 0.0]);
        assert!(classifier.misclassify_record().is_empty());
    }

    #[test]
    fn test_invalid_training_input_leaves_state_untouched() {
        let mut classifier = PocketClassifier::new(2, ("a", "b")).unwrap();
        let samples = vec![vec![1.0, 2.0], vec![3.0, 4.0]];

        assert_eq!(
            classifier.train(&samples, &["a"], None),
            Err(ClassifierError::LengthMismatch { samples: 2, labels: 1 })
        );
        assert_eq!(
            classifier.train(&samples, &["a", "c"], None),
            Err(ClassifierError::UnknownLabel { index: 1 })
        );
        assert_eq!(
            classifier.train(&[vec![1.0, 2.0], vec![3.0]], &["a", "b"], None),
            Err(ClassifierError::DimensionMismatch { index: 1, expected: 2, got: 1 })
        );
        assert_eq!(classifier.weights(), &[0.0, 0.0, 0.0]);
        assert!(!classifier.pocket().is_initialized());
    }

    #[test]
    fn test_train_points_matches_train() {
        let (samples, labels) = alternating();
        let points: Vec<DataPoint<f64, &str>> = samples
            .iter()
            .cloned()
            .zip(labels.iter().copied())
            .map(|(features, label)| DataPoint::new(features, label))
            .collect();

        let mut a = PocketClassifier::new(1, ("a", "b")).unwrap();
        let mut b = PocketClassifier::new(1, ("a", "b")).unwrap();
        a.train(&samples, &labels, Some(6)).unwrap();
        b.train_points(&points, Some(6)).unwrap();
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.pocket(), b.pocket());
        assert_eq!(a.misclassify_record(), b.misclassify_record());
    }
}
