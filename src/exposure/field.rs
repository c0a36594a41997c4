//! Classification of compromised data field names.

use serde::{Deserialize, Serialize};

/// Category of a compromised data field.
///
/// Breach datasets name exposed fields freely ("password", "Passwords",
/// "pwd", ...). Every token is folded into one of these categories before
/// scoring; anything unrecognized lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataField {
    Email,
    Username,
    Name,
    Phone,
    Address,
    DateOfBirth,
    IpAddress,
    SecurityQuestions,
    PasswordHash,
    Password,
    TwoFactorBackupCodes,
    FinancialCard,
    BankAccount,
    GovernmentId,
    Other,
}

impl DataField {
    pub const ALL: [DataField; 15] = [
        DataField::Email,
        DataField::Username,
        DataField::Name,
        DataField::Phone,
        DataField::Address,
        DataField::DateOfBirth,
        DataField::IpAddress,
        DataField::SecurityQuestions,
        DataField::PasswordHash,
        DataField::Password,
        DataField::TwoFactorBackupCodes,
        DataField::FinancialCard,
        DataField::BankAccount,
        DataField::GovernmentId,
        DataField::Other,
    ];

    /// Classify a raw field token. Case, surrounding whitespace, spaces and
    /// hyphens are not significant.
    pub fn classify(token: &str) -> Self {
        let key: String = token
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match key.as_str() {
            "email" | "emails" | "email_address" | "email_addresses" | "e_mail" => {
                DataField::Email
            }
            "username" | "usernames" | "user_name" | "login" | "screen_name" => {
                DataField::Username
            }
            "name" | "names" | "full_name" | "first_name" | "last_name" => DataField::Name,
            "phone" | "phones" | "phone_number" | "phone_numbers" | "mobile" => DataField::Phone,
            "address" | "addresses" | "physical_address" | "physical_addresses"
            | "home_address" | "postal_address" => DataField::Address,
            "dob" | "date_of_birth" | "dates_of_birth" | "birthdate" | "birthday" => {
                DataField::DateOfBirth
            }
            "ip" | "ip_address" | "ip_addresses" => DataField::IpAddress,
            "security_questions" | "security_questions_and_answers" | "security_answers" => {
                DataField::SecurityQuestions
            }
            "password_hash" | "password_hashes" | "hashed_password" | "hashed_passwords"
            | "hash" | "pwd_hash" => DataField::PasswordHash,
            "password" | "passwords" | "pwd" | "plaintext_password" | "plaintext_passwords" => {
                DataField::Password
            }
            "2fa_backup_codes" | "mfa_backup_codes" | "backup_codes" | "recovery_codes" => {
                DataField::TwoFactorBackupCodes
            }
            "credit_card" | "credit_cards" | "card_number" | "partial_credit_card_data"
            | "payment_card" | "financial_card" => DataField::FinancialCard,
            "bank_account" | "bank_accounts" | "bank_account_numbers" | "iban" => {
                DataField::BankAccount
            }
            "ssn" | "national_id" | "passport" | "passport_numbers" | "government_issued_ids"
            | "social_security_numbers" | "tax_id" | "government_id" => DataField::GovernmentId,
            _ => DataField::Other,
        }
    }

    /// Whether the category exposes a credential (plaintext or hashed).
    pub fn is_password_related(&self) -> bool {
        matches!(self, DataField::Password | DataField::PasswordHash)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataField::Email => "email",
            DataField::Username => "username",
            DataField::Name => "name",
            DataField::Phone => "phone",
            DataField::Address => "address",
            DataField::DateOfBirth => "date_of_birth",
            DataField::IpAddress => "ip_address",
            DataField::SecurityQuestions => "security_questions",
            DataField::PasswordHash => "password_hash",
            DataField::Password => "password",
            DataField::TwoFactorBackupCodes => "2fa_backup_codes",
            DataField::FinancialCard => "financial_card",
            DataField::BankAccount => "bank_account",
            DataField::GovernmentId => "government_id",
            DataField::Other => "other",
        }
    }
}

impl std::fmt::Display for DataField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
