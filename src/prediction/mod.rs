#[cfg(test)]
pub(crate) mod fixtures;
pub mod prediction_engine;
pub mod region_averages;
