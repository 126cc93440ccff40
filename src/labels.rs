//! Translation between the caller's two class labels and internal class codes.

use crate::common_types::ClassCode;
use crate::error::{ClassifierError, Result};

/// Two fixed-size lookup tables built once at construction.
/// Slot 0 holds the label for `Positive`, slot 1 the label for `Negative`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap<L> {
    labels: [L; 2],
}

impl<L: Clone + PartialEq> LabelMap<L> {
    pub fn new(class_labels: (L, L)) -> Result<Self> {
        let (first, second) = class_labels;
        if first == second {
            return Err(ClassifierError::DuplicateLabels);
        }
        Ok(LabelMap { labels: [first, second] })
    }

    /// Reverse lookup: label to code. `None` for a label outside the pair.
    pub fn code_of(&self, label: &L) -> Option<ClassCode> {
        if *label == self.labels[0] {
            Some(ClassCode::Positive)
        } else if *label == self.labels[1] {
            Some(ClassCode::Negative)
        } else {
            None
        }
    }

    /// Forward lookup: code to label.
    pub fn label_of(&self, code: ClassCode) -> &L {
        match code {
            ClassCode::Positive => &self.labels[0],
            ClassCode::Negative => &self.labels[1],
        }
    }

    pub fn labels(&self) -> (&L, &L) {
        (&self.labels[0], &self.labels[1])
    }

    /// Translates a label sequence, failing on the first unknown label.
    pub fn encode_all(&self, labels: &[L]) -> Result<Vec<ClassCode>> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| self.code_of(label).ok_or(ClassifierError::UnknownLabel { index }))
            .collect()
    }
}
