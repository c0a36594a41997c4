//! Per-record severity scoring.

use crate::exposure::{DataField, ExposureRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lower bound of the per-record severity scale.
pub const MIN_SEVERITY: f64 = 1.0;
/// Upper bound of the per-record severity scale.
pub const MAX_SEVERITY: f64 = 5.0;

/// Points contributed by each exposed field category.
///
/// A record's severity is the sum over its distinct categories, clamped to
/// `MIN_SEVERITY..=MAX_SEVERITY`. All weights must be non-negative so that
/// adding a field never lowers the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub email: f64,
    pub username: f64,
    pub name: f64,
    pub phone: f64,
    pub address: f64,
    pub date_of_birth: f64,
    pub ip_address: f64,
    pub security_questions: f64,
    pub password_hash: f64,
    pub password: f64,
    pub two_factor_backup_codes: f64,
    pub financial_card: f64,
    pub bank_account: f64,
    pub government_id: f64,
    pub other: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            email: 1.0,
            username: 0.5,
            name: 0.25,
            phone: 0.5,
            address: 0.5,
            date_of_birth: 0.75,
            ip_address: 0.25,
            security_questions: 1.0,
            password_hash: 1.5,
            password: 2.5,
            two_factor_backup_codes: 2.0,
            financial_card: 2.0,
            bank_account: 2.0,
            government_id: 2.0,
            other: 0.1,
        }
    }
}

impl FieldWeights {
    pub fn points(&self, field: DataField) -> f64 {
        match field {
            DataField::Email => self.email,
            DataField::Username => self.username,
            DataField::Name => self.name,
            DataField::Phone => self.phone,
            DataField::Address => self.address,
            DataField::DateOfBirth => self.date_of_birth,
            DataField::IpAddress => self.ip_address,
            DataField::SecurityQuestions => self.security_questions,
            DataField::PasswordHash => self.password_hash,
            DataField::Password => self.password,
            DataField::TwoFactorBackupCodes => self.two_factor_backup_codes,
            DataField::FinancialCard => self.financial_card,
            DataField::BankAccount => self.bank_account,
            DataField::GovernmentId => self.government_id,
            DataField::Other => self.other,
        }
    }

    /// First category whose weight is negative or not finite.
    pub fn first_invalid(&self) -> Option<DataField> {
        DataField::ALL.into_iter().find(|&field| {
            let points = self.points(field);
            !points.is_finite() || points < 0.0
        })
    }

    /// Severity of a set of field categories.
    pub fn severity_of(&self, categories: &BTreeSet<DataField>) -> f64 {
        let raw: f64 = categories.iter().map(|&c| self.points(c)).sum();
        raw.clamp(MIN_SEVERITY, MAX_SEVERITY)
    }

    /// Severity of a single exposure record.
    pub fn record_severity(&self, record: &ExposureRecord) -> f64 {
        self.severity_of(&record.categories())
    }
}
