use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of neighborhood codes the model was trained on. Anything
/// outside this set is rejected at deserialization time, before it can
/// reach the model as an unseen categorical level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighborhood {
    CollgCr,
    Veenker,
    Crawfor,
    NoRidge,
    Mitchel,
    Somerst,
    NWAmes,
    OldTown,
    BrkSide,
    Sawyer,
    NridgHt,
    NAmes,
    SawyerW,
    IDOTRR,
    MeadowV,
    Edwards,
    Timber,
    Gilbert,
    StoneBr,
    ClearCr,
    NPkVill,
    Blmngtn,
    BrDale,
    SWISU,
    Blueste,
}

impl Neighborhood {
    pub const ALL: [Neighborhood; 25] = [
        Neighborhood::CollgCr,
        Neighborhood::Veenker,
        Neighborhood::Crawfor,
        Neighborhood::NoRidge,
        Neighborhood::Mitchel,
        Neighborhood::Somerst,
        Neighborhood::NWAmes,
        Neighborhood::OldTown,
        Neighborhood::BrkSide,
        Neighborhood::Sawyer,
        Neighborhood::NridgHt,
        Neighborhood::NAmes,
        Neighborhood::SawyerW,
        Neighborhood::IDOTRR,
        Neighborhood::MeadowV,
        Neighborhood::Edwards,
        Neighborhood::Timber,
        Neighborhood::Gilbert,
        Neighborhood::StoneBr,
        Neighborhood::ClearCr,
        Neighborhood::NPkVill,
        Neighborhood::Blmngtn,
        Neighborhood::BrDale,
        Neighborhood::SWISU,
        Neighborhood::Blueste,
    ];

    /// The code exactly as it appears in the training data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Neighborhood::CollgCr => "CollgCr",
            Neighborhood::Veenker => "Veenker",
            Neighborhood::Crawfor => "Crawfor",
            Neighborhood::NoRidge => "NoRidge",
            Neighborhood::Mitchel => "Mitchel",
            Neighborhood::Somerst => "Somerst",
            Neighborhood::NWAmes => "NWAmes",
            Neighborhood::OldTown => "OldTown",
            Neighborhood::BrkSide => "BrkSide",
            Neighborhood::Sawyer => "Sawyer",
            Neighborhood::NridgHt => "NridgHt",
            Neighborhood::NAmes => "NAmes",
            Neighborhood::SawyerW => "SawyerW",
            Neighborhood::IDOTRR => "IDOTRR",
            Neighborhood::MeadowV => "MeadowV",
            Neighborhood::Edwards => "Edwards",
            Neighborhood::Timber => "Timber",
            Neighborhood::Gilbert => "Gilbert",
            Neighborhood::StoneBr => "StoneBr",
            Neighborhood::ClearCr => "ClearCr",
            Neighborhood::NPkVill => "NPkVill",
            Neighborhood::Blmngtn => "Blmngtn",
            Neighborhood::BrDale => "BrDale",
            Neighborhood::SWISU => "SWISU",
            Neighborhood::Blueste => "Blueste",
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
