//! This module contains common data structures shared by the linear classifiers.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a single data point, with features and a label.
///
/// - `F`: The type of the features (e.g., `f64`, `f32`).
/// - `L`: The type of the label (e.g., `i32`, `String`, an enum).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataPoint<F, L> {
    pub features: Vec<F>,
    pub label: L,
}

impl<F, L> DataPoint<F, L> {
    pub fn new(features: Vec<F>, label: L) -> Self {
        DataPoint { features, label }
    }
}

/// Internal numeric class code. The first class label maps to `Positive` (+1),
/// the second to `Negative` (-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClassCode {
    Positive,
    Negative,
}

impl ClassCode {
    /// `+1` or `-1` in the feature type.
    pub fn sign<F: Float>(self) -> F {
        match self {
            ClassCode::Positive => F::one(),
            ClassCode::Negative => -F::one(),
        }
    }

    /// Thresholds an activation value. Ties (`0.0`) resolve to `Positive`.
    pub fn from_activation<F: Float>(value: F) -> Self {
        if value >= F::zero() {
            ClassCode::Positive
        } else {
            ClassCode::Negative
        }
    }
}
