//! Binary logistic regression fitted by full-batch gradient descent on standardized
//! features.

use crate::model::error::TrainingError;
use crate::model::training_config::TrainingConfig;
use crate::types::feature_vector::MODEL_FEATURE_COUNT;
use log::{debug, warn};
use ndarray::{Array1, Array2, Axis};

/// A fitted rain classifier. Built per request and never persisted.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    weights: Array1<f64>,
    intercept: f64,
    mean: Array1<f64>,
    scale: Array1<f64>,
    iterations: usize,
}

impl LogisticRegression {
    /// Fits the model to `rows` labelled by `labels` (`true` = precipitation).
    ///
    /// Features are standardized with the training mean and population standard
    /// deviation; constant columns keep a scale of 1 and end up contributing nothing.
    /// Given identical inputs the result is bit-for-bit identical.
    pub fn fit(
        rows: &[[f64; MODEL_FEATURE_COUNT]],
        labels: &[bool],
        config: &TrainingConfig,
    ) -> Result<Self, TrainingError> {
        if rows.is_empty() {
            return Err(TrainingError::EmptyTrainingSet);
        }
        if rows.len() != labels.len() {
            return Err(TrainingError::LabelCountMismatch {
                rows: rows.len(),
                labels: labels.len(),
            });
        }
        if let Some(row) = rows
            .iter()
            .position(|values| values.iter().any(|v| !v.is_finite()))
        {
            return Err(TrainingError::NonFiniteFeature { row });
        }

        let positives = labels.iter().filter(|&&label| label).count();
        if positives == 0 || positives == labels.len() {
            warn!(
                "All {} training rows share the same label; the model will only learn the base rate",
                labels.len()
            );
        }

        let x = Array2::from(rows.to_vec());
        let y: Array1<f64> = labels
            .iter()
            .map(|&label| if label { 1.0 } else { 0.0 })
            .collect();

        let mean = x
            .mean_axis(Axis(0))
            .ok_or(TrainingError::EmptyTrainingSet)?;
        let scale = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > f64::EPSILON { s } else { 1.0 });
        let x = (&x - &mean) / &scale;
        let n = x.nrows() as f64;

        let mut weights = Array1::<f64>::zeros(MODEL_FEATURE_COUNT);
        let mut intercept = 0.0;
        let mut iterations = 0;

        while iterations < config.max_iterations {
            let probabilities = (x.dot(&weights) + intercept).mapv(sigmoid);
            let residuals = &probabilities - &y;
            let weight_gradient = x.t().dot(&residuals) / n + &weights * config.l2_penalty;
            let intercept_gradient = residuals.sum() / n;
            iterations += 1;

            let gradient_norm =
                (weight_gradient.dot(&weight_gradient) + intercept_gradient * intercept_gradient)
                    .sqrt();
            if gradient_norm < config.tolerance {
                break;
            }

            weights.scaled_add(-config.learning_rate, &weight_gradient);
            intercept -= config.learning_rate * intercept_gradient;
        }

        let probabilities = (x.dot(&weights) + intercept).mapv(sigmoid);
        debug!(
            "Fitted logistic regression on {} rows ({} with rain) in {} iterations, log loss {:.5}",
            rows.len(),
            positives,
            iterations,
            log_loss(&probabilities, &y)
        );

        Ok(Self {
            weights,
            intercept,
            mean,
            scale,
            iterations,
        })
    }

    /// Probability of precipitation for one set of raw (unstandardized) inputs.
    pub fn probability(&self, inputs: &[f64; MODEL_FEATURE_COUNT]) -> f64 {
        let z: f64 = inputs
            .iter()
            .zip(self.mean.iter())
            .zip(self.scale.iter())
            .zip(self.weights.iter())
            .map(|(((x, mean), scale), weight)| (x - mean) / scale * weight)
            .sum();
        sigmoid(z + self.intercept)
    }

    /// Weights in standardized feature space.
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of gradient steps taken before stopping.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn log_loss(probabilities: &Array1<f64>, labels: &Array1<f64>) -> f64 {
    let clamp = |p: f64| p.clamp(1e-15, 1.0 - 1e-15);
    let total: f64 = probabilities
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| -(y * clamp(p).ln() + (1.0 - y) * (1.0 - clamp(p)).ln()))
        .sum();
    total / probabilities.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rain whenever the air is warmer than 300 K; everything else constant.
    fn warm_means_rain() -> (Vec<[f64; MODEL_FEATURE_COUNT]>, Vec<bool>) {
        (0..40_i32)
            .map(|i| {
                let temperature = 280.0 + f64::from(i);
                (
                    [temperature, 0.01, 3.0, 200.0, 350.0],
                    temperature > 300.0,
                )
            })
            .unzip()
    }

    #[test]
    fn test_learns_direction_of_signal() -> Result<(), TrainingError> {
        let (rows, labels) = warm_means_rain();
        let model = LogisticRegression::fit(&rows, &labels, &TrainingConfig::default())?;

        let hot = model.probability(&[318.0, 0.01, 3.0, 200.0, 350.0]);
        let cold = model.probability(&[281.0, 0.01, 3.0, 200.0, 350.0]);
        assert!(hot > 0.9, "hot = {hot}");
        assert!(cold < 0.1, "cold = {cold}");
        assert!(model.weights()[0] > 0.0);
        // Constant columns carry no weight.
        assert!(model.weights()[1].abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_single_class_learns_base_rate() -> Result<(), TrainingError> {
        let rows: Vec<[f64; MODEL_FEATURE_COUNT]> = (0..25_i32)
            .map(|i| [290.0 + f64::from(i % 5), 0.01, f64::from(i % 3), 100.0, 320.0])
            .collect();
        let labels = vec![false; rows.len()];
        let model = LogisticRegression::fit(&rows, &labels, &TrainingConfig::default())?;

        let probability = model.probability(&rows[7]);
        assert!(probability < 0.25, "probability = {probability}");
        assert!(model.intercept() < 0.0);
        Ok(())
    }

    #[test]
    fn test_fit_is_deterministic() -> Result<(), TrainingError> {
        let (rows, labels) = warm_means_rain();
        let config = TrainingConfig::default();
        let first = LogisticRegression::fit(&rows, &labels, &config)?;
        let second = LogisticRegression::fit(&rows, &labels, &config)?;
        assert_eq!(first.weights(), second.weights());
        assert_eq!(first.intercept(), second.intercept());
        assert_eq!(first.iterations(), second.iterations());
        Ok(())
    }

    #[test]
    fn test_probability_stays_in_unit_interval() -> Result<(), TrainingError> {
        let (rows, labels) = warm_means_rain();
        let model = LogisticRegression::fit(&rows, &labels, &TrainingConfig::default())?;
        for inputs in [
            [1e9, 0.0, 0.0, 0.0, 0.0],
            [-1e9, 0.0, 0.0, 0.0, 0.0],
            [0.0; MODEL_FEATURE_COUNT],
        ] {
            let p = model.probability(&inputs);
            assert!((0.0..=1.0).contains(&p), "p = {p}");
        }
        Ok(())
    }

    #[test]
    fn test_iteration_cap_is_respected() -> Result<(), TrainingError> {
        let (rows, labels) = warm_means_rain();
        let config = TrainingConfig::builder().max_iterations(3).build();
        let model = LogisticRegression::fit(&rows, &labels, &config)?;
        assert_eq!(model.iterations(), 3);
        Ok(())
    }

    #[test]
    fn test_rejects_bad_training_sets() {
        let config = TrainingConfig::default();
        assert!(matches!(
            LogisticRegression::fit(&[], &[], &config),
            Err(TrainingError::EmptyTrainingSet)
        ));
        assert!(matches!(
            LogisticRegression::fit(&[[1.0; MODEL_FEATURE_COUNT]], &[true, false], &config),
            Err(TrainingError::LabelCountMismatch { rows: 1, labels: 2 })
        ));
        let rows = [[1.0; MODEL_FEATURE_COUNT], [1.0, f64::NAN, 1.0, 1.0, 1.0]];
        assert!(matches!(
            LogisticRegression::fit(&rows, &[true, false], &config),
            Err(TrainingError::NonFiniteFeature { row: 1 })
        ));
    }
}
