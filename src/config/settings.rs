//! Persisted settings
//!
//! The samity's two operating parameters: the monthly interest rate applied
//! to outstanding principal, and the default deposit amount for bulk monthly
//! collection.

use serde::{Deserialize, Serialize};

use super::paths::SamityPaths;
use crate::error::SamityError;
use crate::models::Money;

/// Operating settings for the samity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Monthly interest rate as a percentage (5.0 means 5%)
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    /// Default deposit amount for the monthly collection
    #[serde(default = "default_monthly_savings_amount")]
    pub monthly_savings_amount: Money,
}

fn default_interest_rate() -> f64 {
    5.0
}

fn default_monthly_savings_amount() -> Money {
    Money::from_rupees(100)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interest_rate: default_interest_rate(),
            monthly_savings_amount: default_monthly_savings_amount(),
        }
    }
}

impl Settings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), SamityError> {
        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(SamityError::Validation(format!(
                "Interest rate must be a non-negative percentage, got {}",
                self.interest_rate
            )));
        }
        if !self.monthly_savings_amount.is_positive() {
            return Err(SamityError::Validation(format!(
                "Monthly savings amount must be positive, got {}",
                self.monthly_savings_amount
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SamityPaths) -> Result<Self, SamityError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SamityError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SamityError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let the caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SamityPaths) -> Result<(), SamityError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SamityError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SamityError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
