use crate::features::request::PredictionRequest;

/// Training column names, in training order. The frame is always built in
/// exactly this order regardless of how the request arrived.
pub const FEATURE_COLUMNS: [&str; 6] = [
    "OverallQual",
    "GrLivArea",
    "GarageCars",
    "FullBath",
    "YearBuilt",
    "Neighborhood",
];

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Int(i64),
    Text(String),
}

impl FeatureValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(v) => Some(*v as f64),
            FeatureValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FeatureValue::Int(_) => None,
            FeatureValue::Text(s) => Some(s),
        }
    }
}

/// Single-row feature table handed to the model, the tabular record the
/// regression was trained on.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    values: [FeatureValue; 6],
}

impl FeatureFrame {
    pub fn from_request(req: &PredictionRequest) -> Self {
        Self {
            values: [
                FeatureValue::Int(req.overall_qual),
                FeatureValue::Int(req.gr_liv_area),
                FeatureValue::Int(req.garage_cars),
                FeatureValue::Int(req.full_bath),
                FeatureValue::Int(req.year_built),
                FeatureValue::Text(req.neighborhood.as_str().to_string()),
            ],
        }
    }

    pub fn columns(&self) -> &'static [&'static str; 6] {
        &FEATURE_COLUMNS
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|i| &self.values[i])
    }

    pub fn numeric(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(FeatureValue::as_f64)
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(FeatureValue::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::neighborhood::Neighborhood;

    fn request() -> PredictionRequest {
        PredictionRequest {
            overall_qual: 7,
            gr_liv_area: 2000,
            garage_cars: 2,
            full_bath: 2,
            year_built: 2005,
            neighborhood: Neighborhood::NridgHt,
        }
    }

    #[test]
    fn test_column_names_and_order_are_fixed() {
        let frame = FeatureFrame::from_request(&request());
        assert_eq!(
            frame.columns(),
            &[
                "OverallQual",
                "GrLivArea",
                "GarageCars",
                "FullBath",
                "YearBuilt",
                "Neighborhood"
            ]
        );
    }

    #[test]
    fn test_values_land_in_their_columns() {
        let frame = FeatureFrame::from_request(&request());
        assert_eq!(frame.numeric("OverallQual"), Some(7.0));
        assert_eq!(frame.numeric("GrLivArea"), Some(2000.0));
        assert_eq!(frame.numeric("GarageCars"), Some(2.0));
        assert_eq!(frame.numeric("FullBath"), Some(2.0));
        assert_eq!(frame.numeric("YearBuilt"), Some(2005.0));
        assert_eq!(frame.text("Neighborhood"), Some("NridgHt"));
    }

    #[test]
    fn test_neighborhood_is_not_numeric() {
        let frame = FeatureFrame::from_request(&request());
        assert_eq!(frame.numeric("Neighborhood"), None);
        assert_eq!(frame.text("OverallQual"), None);
    }

    #[test]
    fn test_unknown_column_is_absent() {
        let frame = FeatureFrame::from_request(&request());
        assert!(frame.get("LotArea").is_none());
    }
}
