//! Feature encoding
//!
//! Transforms an `AssessmentRecord` into the fixed-order numeric
//! vector the scoring model was trained on. Order, categorical codes,
//! and fallback values are model-contractual: changing any of them
//! makes predictions silently wrong.

use crate::assessment::{AssessmentRecord, ChestPainType, Sex, Slope, Thal};

/// Fixed-order numeric encoding of a clinical record
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; FeatureVector::LEN]);

impl FeatureVector {
    /// Number of features the model consumes
    pub const LEN: usize = 13;

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn values(&self) -> &[f64; Self::LEN] {
        &self.0
    }
}

impl From<FeatureVector> for [f64; FeatureVector::LEN] {
    fn from(vector: FeatureVector) -> Self {
        vector.0
    }
}

/// Fasting-blood-sugar clinical cutoff in mg/dL; the encoded flag is
/// 1 strictly above this value
const FASTING_BLOOD_SUGAR_CUTOFF: f64 = 120.0;

fn chest_pain_code(cp: ChestPainType) -> f64 {
    match cp {
        ChestPainType::Typical => 0.0,
        ChestPainType::Atypical => 1.0,
        ChestPainType::NonAnginal => 2.0,
        ChestPainType::Asymptomatic => 3.0,
    }
}

fn slope_code(slope: Slope) -> f64 {
    match slope {
        Slope::Upsloping => 0.0,
        Slope::Flat => 1.0,
        Slope::Downsloping => 2.0,
    }
}

fn thal_code(thal: Thal) -> f64 {
    match thal {
        Thal::Normal => 0.0,
        Thal::FixedDefect => 1.0,
        Thal::ReversibleDefect => 2.0,
    }
}

/// Encode a record into the model's feature layout
///
/// Pure and total: allocates a fresh vector per call, never inspects
/// `resting_ecg` (that slot is a constant 0 in the trained layout),
/// and is safe to call concurrently without synchronization.
pub fn encode(record: &AssessmentRecord) -> FeatureVector {
    FeatureVector([
        record.age as f64,
        match record.sex {
            Sex::Male => 1.0,
            Sex::Female => 0.0,
        },
        chest_pain_code(record.chest_pain_type),
        record.blood_pressure,
        record.cholesterol,
        if record.fasting_blood_sugar > FASTING_BLOOD_SUGAR_CUTOFF {
            1.0
        } else {
            0.0
        },
        0.0, // restingECG slot, intentionally ignored
        record.max_heart_rate,
        if record.exercise_angina { 1.0 } else { 0.0 },
        record.oldpeak,
        slope_code(record.slope),
        record.colored_vessels as f64,
        thal_code(record.thal),
    ])
}
