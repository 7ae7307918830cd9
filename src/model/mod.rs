pub mod error;
pub mod logistic_regression;
pub mod training_config;
