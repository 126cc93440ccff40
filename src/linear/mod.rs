//! Linear threshold units trained with the perceptron update rule.

pub mod perceptron;
pub mod pocket;

use num_traits::Float;

use crate::common_types::ClassCode;
use crate::error::{ClassifierError, Result};

/// Common surface of the binary linear classifiers.
pub trait BinaryClassifier<F, L> {
    /// Runs up to `max_iterations` passes (default 10) over the training data.
    fn train(&mut self, samples: &[Vec<F>], labels: &[L], max_iterations: Option<usize>) -> Result<()>;

    /// Predicts one label per sample.
    fn classify(&self, new_data: &[Vec<F>]) -> Result<Vec<L>>;

    /// Misclassification counts recorded for passes that did not converge.
    fn misclassify_record(&self) -> &[usize];
}

/// Calculates the dot product of two vectors.
fn dot_product<F: Float>(a: &[F], b: &[F]) -> F {
    a.iter().zip(b.iter()).fold(F::zero(), |acc, (&x, &y)| acc + x * y)
}

/// A weight vector of length `d + 1`. Index 0 is the bias.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<F> {
    weights: Vec<F>,
}

impl<F: Float> LinearModel<F> {
    pub fn zeros(number_of_attributes: usize) -> Self {
        LinearModel { weights: vec![F::zero(); number_of_attributes + 1] }
    }

    /// Wraps an existing `d + 1` weight vector.
    pub(crate) fn from_weights(weights: Vec<F>) -> Self {
        LinearModel { weights }
    }

    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    /// Number of attributes, i.e. weights excluding the bias.
    pub fn dimension(&self) -> usize {
        self.weights.len().saturating_sub(1)
    }

    /// Dot product of the sample with `weights[1..]`. The bias is not included.
    pub fn linear_combination(&self, sample: &[F]) -> F {
        dot_product(sample, &self.weights[1..])
    }

    /// `linear_combination(sample) + bias`.
    pub fn activation(&self, sample: &[F]) -> F {
        self.linear_combination(sample) + self.weights[0]
    }

    /// One online pass over the data, updating after each sample.
    /// Returns the number of misclassified samples.
    ///
    /// The prediction made while training thresholds the linear combination
    /// alone; the bias only enters through its own update.
    pub fn learn_pass(&mut self, samples: &[Vec<F>], targets: &[ClassCode]) -> usize {
        let mut misclassifies = 0;
        for (sample, &target) in samples.iter().zip(targets.iter()) {
            let predicted = ClassCode::from_activation(self.linear_combination(sample));
            // takes values in {-2, 0, 2}
            let update = target.sign::<F>() - predicted.sign::<F>();
            if update == F::zero() {
                continue;
            }

            for (w, &x) in self.weights[1..].iter_mut().zip(sample.iter()) {
                *w = *w + update * x;
            }
            self.weights[0] = self.weights[0] + update;
            misclassifies += 1;
        }
        misclassifies
    }

    pub fn predict_codes(&self, new_data: &[Vec<F>]) -> Vec<ClassCode> {
        new_data
            .iter()
            .map(|sample| ClassCode::from_activation(self.activation(sample)))
            .collect()
    }

    /// Fails on the first sample whose arity differs from the model's.
    pub fn check_dimensions(&self, samples: &[Vec<F>]) -> Result<()> {
        let expected = self.dimension();
        match samples.iter().position(|sample| sample.len() != expected) {
            Some(index) => Err(ClassifierError::DimensionMismatch {
                index,
                expected,
                got: samples[index].len(),
            }),
            None => Ok(()),
        }
    }
}

/// Shared up-front validation of a training set. Returns the encoded targets.
pub(crate) fn validate_training_set<F, L>(
    model: &LinearModel<F>,
    label_map: &crate::labels::LabelMap<L>,
    samples: &[Vec<F>],
    labels: &[L],
) -> Result<Vec<ClassCode>>
where
    F: Float,
    L: Clone + PartialEq,
{
    if samples.len() != labels.len() {
        return Err(ClassifierError::LengthMismatch {
            samples: samples.len(),
            labels: labels.len(),
        });
    }
    model.check_dimensions(samples)?;
    label_map.encode_all(labels)
}
