//! Perceptron and Pocket binary linear classifiers.
//!
//! Both learn a `d + 1` weight vector (index 0 is the bias) with the online
//! perceptron rule. The Pocket classifier additionally keeps the best weight
//! vector seen across passes, which matters when the data is not linearly
//! separable.

pub mod common_types;
pub mod error;
pub mod labels;
pub mod linear;

pub use common_types::{ClassCode, DataPoint};
pub use error::{ClassifierError, Result};
pub use labels::LabelMap;
pub use linear::perceptron::PerceptronClassifier;
pub use linear::pocket::{Pocket, PocketClassifier};
pub use linear::{BinaryClassifier, LinearModel};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
impl From<ClassifierError> for PyErr {
    fn from(err: ClassifierError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }
}

/// A class label coming from Python. Labels may be ints or strings.
#[cfg(feature = "python")]
#[derive(Debug, Clone, PartialEq, FromPyObject)]
enum PyLabel {
    Int(i64),
    Str(String),
}

#[cfg(feature = "python")]
impl IntoPy<PyObject> for PyLabel {
    fn into_py(self, py: Python<'_>) -> PyObject {
        match self {
            PyLabel::Int(value) => value.into_py(py),
            PyLabel::Str(value) => value.into_py(py),
        }
    }
}

/// Python passes `max_iterator` as a plain int; anything `<= 0` runs no pass.
#[cfg(feature = "python")]
fn iterations_from_py(max_iterator: i64) -> usize {
    usize::try_from(max_iterator).unwrap_or(0)
}

#[cfg(feature = "python")]
#[pyclass(name = "PocketClassifier")]
struct PyPocketClassifier {
    classifier: PocketClassifier<f64, PyLabel>,
}

#[cfg(feature = "python")]
#[pymethods]
impl PyPocketClassifier {
    #[new]
    fn new(number_of_attributes: usize, class_labels: (PyLabel, PyLabel)) -> PyResult<Self> {
        Ok(PyPocketClassifier {
            classifier: PocketClassifier::new(number_of_attributes, class_labels)?,
        })
    }

    #[pyo3(signature = (samples, labels, max_iterator = 10))]
    fn train(&mut self, samples: Vec<Vec<f64>>, labels: Vec<PyLabel>, max_iterator: i64) -> PyResult<()> {
        self.classifier
            .train(&samples, &labels, Some(iterations_from_py(max_iterator)))?;
        Ok(())
    }

    fn classify(&self, new_data: Vec<Vec<f64>>) -> PyResult<Vec<PyLabel>> {
        Ok(self.classifier.classify(&new_data)?)
    }

    fn classify_with_pocket(&self, new_data: Vec<Vec<f64>>) -> PyResult<Vec<PyLabel>> {
        Ok(self.classifier.classify_with_pocket(&new_data)?)
    }

    #[getter]
    fn weights(&self) -> Vec<f64> {
        self.classifier.weights().to_vec()
    }

    #[getter]
    fn best_weights(&self) -> Vec<f64> {
        self.classifier.pocket().best_weights().to_vec()
    }

    /// `-1` until the first training pass completes.
    #[getter]
    fn misclassify_count(&self) -> i64 {
        self.classifier
            .pocket()
            .misclassify_count()
            .map_or(-1, |count| count as i64)
    }

    #[getter]
    fn misclassify_record(&self) -> Vec<usize> {
        self.classifier.misclassify_record().to_vec()
    }
}

#[cfg(feature = "python")]
#[pyclass(name = "PerceptronClassifier")]
struct PyPerceptronClassifier {
    classifier: PerceptronClassifier<f64, PyLabel>,
}

#[cfg(feature = "python")]
#[pymethods]
impl PyPerceptronClassifier {
    #[new]
    fn new(number_of_attributes: usize, class_labels: (PyLabel, PyLabel)) -> PyResult<Self> {
        Ok(PyPerceptronClassifier {
            classifier: PerceptronClassifier::new(number_of_attributes, class_labels)?,
        })
    }

    #[pyo3(signature = (samples, labels, max_iterator = 10))]
    fn train(&mut self, samples: Vec<Vec<f64>>, labels: Vec<PyLabel>, max_iterator: i64) -> PyResult<()> {
        self.classifier
            .train(&samples, &labels, Some(iterations_from_py(max_iterator)))?;
        Ok(())
    }

    fn classify(&self, new_data: Vec<Vec<f64>>) -> PyResult<Vec<PyLabel>> {
        Ok(self.classifier.classify(&new_data)?)
    }

    #[getter]
    fn weights(&self) -> Vec<f64> {
        self.classifier.weights().to_vec()
    }

    #[getter]
    fn misclassify_record(&self) -> Vec<usize> {
        self.classifier.misclassify_record().to_vec()
    }
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` in `Cargo.toml`.
#[cfg(feature = "python")]
#[pymodule]
fn pocket_perceptron(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPocketClassifier>()?;
    m.add_class::<PyPerceptronClassifier>()?;
    Ok(())
}
