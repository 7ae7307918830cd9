pub mod feature_vector;
pub mod lat_lon;
pub mod measurement_overrides;
pub mod observation;
pub mod prediction_request;
pub mod prediction_result;
pub mod rain_outlook;
pub mod reference_region;
pub mod time_features;
