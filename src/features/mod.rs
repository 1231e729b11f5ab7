pub mod frame;
pub mod neighborhood;
pub mod request;

pub use frame::{FeatureFrame, FeatureValue, FEATURE_COLUMNS};
pub use neighborhood::Neighborhood;
pub use request::PredictionRequest;
