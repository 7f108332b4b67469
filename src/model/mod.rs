//! Placeholder linear model served by the inference backend
//!
//! A single dense layer `y = W·x + b` with 10 input features and 1 output.
//! Parameters are drawn once at startup and never change afterwards, so a
//! model can be shared between request handlers without locking.

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{InferenceError, Result};

pub mod runtime;

pub use runtime::RuntimeInfo;

/// Number of input features the served model expects.
pub const INPUT_FEATURES: usize = 10;

/// Number of values produced per prediction.
pub const OUTPUT_FEATURES: usize = 1;

/// Dense layer with weight shape `[out, in]` and bias shape `[out]`.
#[derive(Debug, Clone)]
pub struct LinearModel {
    weight: Array2<f32>,
    bias: Array1<f32>,
}

impl LinearModel {
    /// Create a layer with uniformly initialised parameters in
    /// `[-1/sqrt(in), 1/sqrt(in))`.
    pub fn new(in_features: usize, out_features: usize, rng: &mut fastrand::Rng) -> Self {
        let bound = if in_features == 0 {
            0.0
        } else {
            1.0 / (in_features as f32).sqrt()
        };
        let mut sample = || (rng.f32() * 2.0 - 1.0) * bound;

        let weight = Array2::from_shape_fn((out_features, in_features), |_| sample());
        let bias = Array1::from_shape_fn(out_features, |_| sample());

        Self { weight, bias }
    }

    /// The 10 -> 1 model served by the inference backend. A seed makes the
    /// parameters reproducible across restarts.
    pub fn placeholder(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self::new(INPUT_FEATURES, OUTPUT_FEATURES, &mut rng)
    }

    /// Build a model from explicit parameters.
    pub fn from_parts(weight: Array2<f32>, bias: Array1<f32>) -> Result<Self> {
        if weight.nrows() != bias.len() {
            return Err(InferenceError::ParameterMismatch {
                rows: weight.nrows(),
                bias: bias.len(),
            }
            .into());
        }
        Ok(Self { weight, bias })
    }

    pub fn in_features(&self) -> usize {
        self.weight.ncols()
    }

    pub fn out_features(&self) -> usize {
        self.weight.nrows()
    }

    pub fn weight(&self) -> &Array2<f32> {
        &self.weight
    }

    pub fn bias(&self) -> &Array1<f32> {
        &self.bias
    }

    /// Apply the layer to an input of exactly `in_features` values.
    pub fn forward(&self, input: ArrayView1<f32>) -> std::result::Result<Array1<f32>, InferenceError> {
        if input.len() != self.in_features() {
            return Err(InferenceError::ShapeMismatch {
                expected: self.in_features(),
                actual: input.len(),
            });
        }

        if let Some(index) = input.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::NonFiniteInput { index });
        }

        let output = self.weight.dot(&input) + &self.bias;

        if output.iter().any(|v| !v.is_finite()) {
            return Err(InferenceError::NonFiniteOutput);
        }

        Ok(output)
    }

    /// Fit `data` to the model width and run a forward pass.
    pub fn predict(&self, data: &[f32]) -> std::result::Result<Vec<f32>, InferenceError> {
        let input = prepare_input(data, self.in_features());
        let output = self.forward(input.view())?;
        Ok(output.to_vec())
    }
}

/// Right-pad `data` with zeros, or truncate it, to exactly `width` values.
pub fn prepare_input(data: &[f32], width: usize) -> Array1<f32> {
    let mut input = Array1::<f32>::zeros(width);
    for (dst, src) in input.iter_mut().zip(data) {
        *dst = *src;
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn ramp_model() -> LinearModel {
        // weight = [1, 2, ..., 10], bias = 0.5
        let weight = Array2::from_shape_fn((1, 10), |(_, j)| (j + 1) as f32);
        LinearModel::from_parts(weight, array![0.5]).unwrap()
    }

    #[test]
    fn test_prepare_input_pads_short_input() {
        let input = prepare_input(&[1.0, 2.0, 3.0], 10);
        assert_eq!(input.len(), 10);
        assert_eq!(input.to_vec(), vec![1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_prepare_input_truncates_long_input() {
        let data: Vec<f32> = (0..15).map(|i| i as f32).collect();
        let input = prepare_input(&data, 10);
        assert_eq!(input.to_vec(), data[..10].to_vec());
    }

    #[test]
    fn test_prepare_input_exact_width_unchanged() {
        let data = vec![0.25; 10];
        assert_eq!(prepare_input(&data, 10).to_vec(), data);
    }

    #[test]
    fn test_predict_matches_linear_transform() {
        let model = ramp_model();

        // Short input: 1*1 + 2*1 + 3*1 + 0.5
        assert_eq!(model.predict(&[1.0, 1.0, 1.0]).unwrap(), vec![6.5]);

        // Exact width: sum(1..=10) + 0.5
        assert_eq!(model.predict(&[1.0; 10]).unwrap(), vec![55.5]);

        // Long input: trailing values are ignored
        let mut long = vec![1.0; 10];
        long.extend_from_slice(&[100.0, 100.0]);
        assert_eq!(model.predict(&long).unwrap(), vec![55.5]);
    }

    #[test]
    fn test_predict_empty_input_returns_bias() {
        let model = ramp_model();
        assert_eq!(model.predict(&[]).unwrap(), vec![0.5]);
    }

    #[test]
    fn test_forward_rejects_wrong_width() {
        let model = ramp_model();
        let err = model.forward(array![1.0, 2.0].view()).unwrap_err();
        assert_eq!(
            err,
            InferenceError::ShapeMismatch {
                expected: 10,
                actual: 2
            }
        );
    }

    #[test]
    fn test_non_finite_values_are_errors() {
        let model = ramp_model();

        let err = model.predict(&[1.0, f32::INFINITY]).unwrap_err();
        assert_eq!(err, InferenceError::NonFiniteInput { index: 1 });

        let err = model.predict(&[f32::MAX; 10]).unwrap_err();
        assert_eq!(err, InferenceError::NonFiniteOutput);
    }

    #[test]
    fn test_from_parts_checks_shapes() {
        let weight = Array2::<f32>::zeros((2, 10));
        assert!(LinearModel::from_parts(weight, array![0.0]).is_err());
    }

    #[test]
    fn test_random_init_within_bounds() {
        let mut rng = fastrand::Rng::with_seed(7);
        let model = LinearModel::new(10, 1, &mut rng);
        let bound = 1.0 / 10f32.sqrt();

        assert_eq!(model.weight().dim(), (1, 10));
        assert_eq!(model.bias().len(), 1);
        assert!(model
            .weight()
            .iter()
            .chain(model.bias().iter())
            .all(|v| v.abs() <= bound));
    }

    #[test]
    fn test_seeded_placeholder_is_reproducible() {
        let a = LinearModel::placeholder(Some(42));
        let b = LinearModel::placeholder(Some(42));
        assert_eq!(a.weight(), b.weight());
        assert_eq!(a.bias(), b.bias());

        let data = [0.1, 0.2, 0.3];
        assert_eq!(a.predict(&data).unwrap(), a.predict(&data).unwrap());
    }
}
