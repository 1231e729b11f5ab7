use serde::{Deserialize, Serialize};

use crate::error::InferenceError;
use crate::features::neighborhood::Neighborhood;

/// One form submission. Field names match the training columns exactly so
/// the JSON payload is the schema the model expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "OverallQual")]
    pub overall_qual: i64,
    #[serde(rename = "GrLivArea")]
    pub gr_liv_area: i64,
    #[serde(rename = "GarageCars")]
    pub garage_cars: i64,
    #[serde(rename = "FullBath")]
    pub full_bath: i64,
    #[serde(rename = "YearBuilt")]
    pub year_built: i64,
    #[serde(rename = "Neighborhood")]
    pub neighborhood: Neighborhood,
}

impl PredictionRequest {
    /// Checks every numeric field against its declared domain. The
    /// neighborhood is already constrained by its enum type.
    pub fn validate(&self) -> Result<(), InferenceError> {
        check_range("OverallQual", self.overall_qual, 1, 10)?;
        check_range("GrLivArea", self.gr_liv_area, 300, 10_000)?;
        check_range("GarageCars", self.garage_cars, 0, 4)?;
        check_range("FullBath", self.full_bath, 0, 4)?;
        check_range("YearBuilt", self.year_built, 1800, 2025)?;
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), InferenceError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(InferenceError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
