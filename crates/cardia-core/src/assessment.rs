//! Validated clinical input record
//!
//! `AssessmentRecord` is the wire-level input to the prediction
//! service: camelCase field names, categorical fields restricted to
//! fixed value sets. Categorical fields deserialize through `FromStr`,
//! so a value outside the declared set is rejected at the boundary
//! with an unmapped-category error instead of reaching the encoder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodingError;

/// Biological sex of the patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(EncodingError::unmapped("sex", other)),
        }
    }
}

/// Chest pain classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChestPainType {
    Typical,
    Atypical,
    NonAnginal,
    Asymptomatic,
}

impl ChestPainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChestPainType::Typical => "typical",
            ChestPainType::Atypical => "atypical",
            ChestPainType::NonAnginal => "nonAnginal",
            ChestPainType::Asymptomatic => "asymptomatic",
        }
    }
}

impl FromStr for ChestPainType {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typical" => Ok(ChestPainType::Typical),
            "atypical" => Ok(ChestPainType::Atypical),
            "nonAnginal" => Ok(ChestPainType::NonAnginal),
            "asymptomatic" => Ok(ChestPainType::Asymptomatic),
            other => Err(EncodingError::unmapped("chestPainType", other)),
        }
    }
}

/// Slope of the peak-exercise ST segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slope {
    Upsloping,
    Flat,
    Downsloping,
}

impl Slope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slope::Upsloping => "upsloping",
            Slope::Flat => "flat",
            Slope::Downsloping => "downsloping",
        }
    }
}

impl FromStr for Slope {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upsloping" => Ok(Slope::Upsloping),
            "flat" => Ok(Slope::Flat),
            "downsloping" => Ok(Slope::Downsloping),
            other => Err(EncodingError::unmapped("slope", other)),
        }
    }
}

/// Thalassemia test result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thal {
    Normal,
    FixedDefect,
    ReversibleDefect,
}

impl Thal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Thal::Normal => "normal",
            Thal::FixedDefect => "fixedDefect",
            Thal::ReversibleDefect => "reversibleDefect",
        }
    }
}

impl FromStr for Thal {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Thal::Normal),
            "fixedDefect" => Ok(Thal::FixedDefect),
            "reversibleDefect" => Ok(Thal::ReversibleDefect),
            other => Err(EncodingError::unmapped("thal", other)),
        }
    }
}

// Serde goes through FromStr/as_str so the wire strings and the
// unmapped-category error stay in one place per enum.
macro_rules! categorical_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

categorical_serde!(Sex);
categorical_serde!(ChestPainType);
categorical_serde!(Slope);
categorical_serde!(Thal);

/// A validated patient assessment, immutable once constructed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    /// Age in years
    pub age: u32,
    pub sex: Sex,
    pub chest_pain_type: ChestPainType,
    /// Free-form ECG description; the encoder never inspects it
    #[serde(rename = "restingECG")]
    pub resting_ecg: String,
    /// Fasting blood sugar in mg/dL
    pub fasting_blood_sugar: f64,
    /// Serum cholesterol in mg/dL
    pub cholesterol: f64,
    /// Resting blood pressure in mmHg
    pub blood_pressure: f64,
    pub max_heart_rate: f64,
    pub exercise_angina: bool,
    /// ST depression induced by exercise relative to rest
    pub oldpeak: f64,
    pub slope: Slope,
    /// Number of major vessels colored by fluoroscopy
    pub colored_vessels: u32,
    pub thal: Thal,
}
