//! Perceptron binary classifier.

use num_traits::Float;
use tracing::{debug, info};

use super::{BinaryClassifier, LinearModel, validate_training_set};
use crate::error::{ClassifierError, Result};
use crate::labels::LabelMap;

/// Perceptron binary classifier. The first class label is mapped to `+1`.
///
/// Unlike [`PocketClassifier`](super::pocket::PocketClassifier) it keeps no
/// best-so-far weights; the record holds each non-converged pass's own
/// misclassification count.
#[derive(Debug, Clone)]
pub struct PerceptronClassifier<F, L> {
    model: LinearModel<F>,
    misclassify_record: Vec<usize>,
    label_map: LabelMap<L>,
}

impl<F, L> PerceptronClassifier<F, L> {
    pub const DEFAULT_MAX_ITERATIONS: usize = 10;
}

impl<F, L> PerceptronClassifier<F, L>
where
    F: Float,
    L: Clone + PartialEq,
{
    pub fn new(number_of_attributes: usize, class_labels: (L, L)) -> Result<Self> {
        if number_of_attributes == 0 {
            return Err(ClassifierError::NoAttributes);
        }
        Ok(PerceptronClassifier {
            model: LinearModel::zeros(number_of_attributes),
            misclassify_record: Vec::new(),
            label_map: LabelMap::new(class_labels)?,
        })
    }

    pub fn train(&mut self, samples: &[Vec<F>], labels: &[L], max_iterations: Option<usize>) -> Result<()> {
        let targets = validate_training_set(&self.model, &self.label_map, samples, labels)?;
        let max_iterations = max_iterations.unwrap_or(Self::DEFAULT_MAX_ITERATIONS);

        for pass in 1..=max_iterations {
            let misclassifies = self.model.learn_pass(samples, &targets);
            debug!(pass, misclassifies, "perceptron pass complete");

            if misclassifies == 0 {
                info!(passes = pass, "perceptron training converged");
                return Ok(());
            }
            self.misclassify_record.push(misclassifies);
        }

        info!(passes = max_iterations, "perceptron training stopped at max iterations");
        Ok(())
    }

    pub fn classify(&self, new_data: &[Vec<F>]) -> Result<Vec<L>> {
        self.model.check_dimensions(new_data)?;
        Ok(self
            .model
            .predict_codes(new_data)
            .into_iter()
            .map(|code| self.label_map.label_of(code).clone())
            .collect())
    }

    pub fn weights(&self) -> &[F] {
        self.model.weights()
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

impl<F, L> BinaryClassifier<F, L> for PerceptronClassifier<F, L>
where
    F: Float,
    L: Clone + PartialEq,
{
    fn train(&mut self, samples: &[Vec<F>], labels: &[L], max_iterations: Option<usize>) -> Result<()> {
        PerceptronClassifier::train(self, samples, labels, max_iterations)
    }

    fn classify(&self, new_data: &[Vec<F>]) -> Result<Vec<L>> {
        PerceptronClassifier::classify(self, new_data)
    }

    fn misclassify_record(&self) -> &[usize] {
        &self.misclassify_record
    }
}
