//! Progress (body measurement) domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One dated set of body measurements. Only filled-in fields are stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub waist_cm: Option<i32>,
    pub chest_cm: Option<i32>,
    pub arms_cm: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressEntry {
    pub weight_kg: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub waist_cm: Option<i32>,
    pub chest_cm: Option<i32>,
    pub arms_cm: Option<i32>,
    pub notes: Option<String>,
}

impl NewProgressEntry {
    pub fn validate(&self) -> Result<()> {
        let measurements = [self.weight_kg, self.muscle_mass_kg, self.body_fat_percent];
        if measurements.iter().flatten().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(Error::invalid_input(
                "Measurements must be non-negative numbers",
            ));
        }
        if [self.waist_cm, self.chest_cm, self.arms_cm]
            .iter()
            .flatten()
            .any(|v| *v < 0)
        {
            return Err(Error::invalid_input("Circumferences cannot be negative"));
        }
        Ok(())
    }

    /// Drops blank notes so an empty text field is not stored.
    pub fn normalized(mut self) -> Self {
        self.notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entry_is_valid() {
        assert!(NewProgressEntry::default().validate().is_ok());
    }

    #[test]
    fn test_negative_measurements_rejected() {
        let entry = NewProgressEntry {
            weight_kg: Some(-1.0),
            ..Default::default()
        };
        assert!(entry.validate().is_err());

        let entry = NewProgressEntry {
            waist_cm: Some(-3),
            ..Default::default()
        };
        assert!(entry.validate().is_err());

        let entry = NewProgressEntry {
            body_fat_percent: Some(f64::NAN),
            ..Default::default()
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_normalized_drops_blank_notes() {
        let entry = NewProgressEntry {
            notes: Some("   ".to_string()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(entry.notes, None);
    }
}
