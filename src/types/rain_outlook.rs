//! Defines the `RainOutlook` enum, the qualitative band a rain probability falls in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Qualitative forecast derived from the probability of precipitation.
///
/// Band upper bounds are inclusive: a probability of exactly `0.25` is still
/// [`RainOutlook::ClearSky`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum RainOutlook {
    /// Probability at most 0.25.
    #[serde(rename = "Clear sky")]
    ClearSky,
    /// Probability in (0.25, 0.50].
    #[serde(rename = "Partly cloudy")]
    PartlyCloudy,
    /// Probability in (0.50, 0.75].
    #[serde(rename = "Chance of rain")]
    ChanceOfRain,
    /// Probability above 0.75.
    #[serde(rename = "High rain or storm")]
    HighRainOrStorm,
}

impl RainOutlook {
    /// Maps a probability to its band.
    ///
    /// # Examples
    ///
    /// ```
    /// use weatherlens::RainOutlook;
    ///
    /// assert_eq!(RainOutlook::from_probability(0.25), RainOutlook::ClearSky);
    /// assert_eq!(RainOutlook::from_probability(0.2500001), RainOutlook::PartlyCloudy);
    /// assert_eq!(RainOutlook::from_probability(1.0), RainOutlook::HighRainOrStorm);
    /// ```
    pub fn from_probability(probability: f64) -> Self {
        if probability <= 0.25 {
            RainOutlook::ClearSky
        } else if probability <= 0.50 {
            RainOutlook::PartlyCloudy
        } else if probability <= 0.75 {
            RainOutlook::ChanceOfRain
        } else {
            RainOutlook::HighRainOrStorm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RainOutlook::ClearSky => "Clear sky",
            RainOutlook::PartlyCloudy => "Partly cloudy",
            RainOutlook::ChanceOfRain => "Chance of rain",
            RainOutlook::HighRainOrStorm => "High rain or storm",
        }
    }
}

impl Display for RainOutlook {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
