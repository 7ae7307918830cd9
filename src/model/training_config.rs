use bon::Builder;
use serde::{Deserialize, Serialize};

/// Hyper-parameters for fitting the rain classifier.
///
/// # Examples
///
/// ```
/// use weatherlens::TrainingConfig;
///
/// let config = TrainingConfig::builder().max_iterations(250).build();
/// assert_eq!(config.max_iterations, 250);
/// assert_eq!(config.learning_rate, TrainingConfig::default().learning_rate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Step size of each gradient descent update, applied to standardized features.
    #[builder(default = 0.5)]
    pub learning_rate: f64,
    /// Upper bound on full-batch gradient steps.
    #[builder(default = 1000)]
    pub max_iterations: usize,
    /// L2 penalty on the weights (not the intercept). Keeps the fit finite when
    /// the training labels are all one class or perfectly separable.
    #[builder(default = 1e-3)]
    pub l2_penalty: f64,
    /// Fitting stops once the gradient norm drops below this.
    #[builder(default = 1e-7)]
    pub tolerance: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig::builder().build()
    }
}
