//! Parsing raw user input into a [`WodRequest`].
//!
//! Front ends hand over whatever the user typed. Strict parsing reports
//! what was wrong; [`WodRequest::from_input`] instead falls back to the
//! default request so the user always gets a workout.

use crate::{Error, Intensity, Result, WodRequest, MAX_TIME_LIMIT};

impl WodRequest {
    /// Strictly parse a time limit (minutes) and an intensity tier
    pub fn parse(time_limit: &str, intensity: &str) -> Result<Self> {
        let time_limit = time_limit.trim();
        let time_limit = time_limit.parse::<u32>().map_err(|e| {
            Error::InvalidRequest(format!("time limit '{}' is not a whole number of minutes: {}", time_limit, e))
        })?;
        if time_limit > MAX_TIME_LIMIT {
            return Err(Error::InvalidRequest(format!(
                "time limit {} exceeds {} minutes",
                time_limit, MAX_TIME_LIMIT
            )));
        }

        let intensity = intensity.trim();
        let tier = intensity.parse::<u8>().map_err(|e| {
            Error::InvalidRequest(format!("intensity '{}' is not a tier number: {}", intensity, e))
        })?;

        Ok(Self::new(time_limit, Intensity::from_tier(tier)?))
    }

    /// Parse user input, replacing the whole request with `defaults` when
    /// either field is missing or malformed
    pub fn from_input(time_limit: Option<&str>, intensity: Option<&str>, defaults: WodRequest) -> Self {
        let (Some(time_limit), Some(intensity)) = (time_limit, intensity) else {
            tracing::warn!(
                "Missing input, using defaults ({} min, tier {})",
                defaults.time_limit,
                defaults.intensity.tier()
            );
            return defaults;
        };

        match Self::parse(time_limit, intensity) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(
                    "{}; using defaults ({} min, tier {})",
                    e,
                    defaults.time_limit,
                    defaults.intensity.tier()
                );
                defaults
            }
        }
    }
}
