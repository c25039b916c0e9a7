//! Equipment (EPI) model

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{dates, not_blank};
use crate::error::{AppError, AppResult};

/// Certificate numbers that collide with static `/epis/...` routes
pub const RESERVED_CERTIFICATES: [&str; 3] = ["vencimento", "vencidas", "substituicao"];

/// Registered protective equipment
///
/// Values are only built from a validated [`CreateEquipment`]; an update
/// produces a new value that replaces the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    /// Equipment name
    #[serde(rename = "epi")]
    pub name: String,
    /// Certificate of approval number (natural key)
    #[serde(rename = "CA")]
    pub certificate: String,
    #[serde(rename = "modo_uso")]
    pub usage_instructions: String,
    /// Certificate expiration date
    #[serde(rename = "validade")]
    pub expiration_date: NaiveDate,
    #[serde(rename = "tipo")]
    pub category: String,
    #[serde(rename = "fabricante")]
    pub manufacturer: String,
    /// Date the equipment entered stock
    #[serde(rename = "data_entrada")]
    pub entry_date: NaiveDate,
}

/// Create equipment request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[serde(default, rename = "epi")]
    #[validate(
        custom(function = "not_blank", message = "Nome do EPI obrigatório"),
        length(max = 100, message = "Nome de EPI muito grande")
    )]
    pub name: String,
    #[serde(default, rename = "CA")]
    #[validate(
        custom(function = "not_blank", message = "Número de CA obrigatório"),
        length(max = 100, message = "Número de CA muito grande")
    )]
    pub certificate: String,
    #[serde(default, rename = "modo_uso")]
    #[validate(custom(function = "not_blank", message = "Modo de uso do EPI obrigatório"))]
    pub usage_instructions: String,
    #[serde(default, rename = "validade", deserialize_with = "dates::deserialize_option")]
    #[validate(required(message = "Validade do EPI obrigatória"))]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default, rename = "tipo")]
    #[validate(
        custom(function = "not_blank", message = "Tipo do EPI obrigatório"),
        length(max = 100, message = "Tipo de EPI muito grande")
    )]
    pub category: String,
    #[serde(default, rename = "fabricante")]
    #[validate(
        custom(function = "not_blank", message = "Fabricante obrigatório"),
        length(max = 100, message = "Nome do fabricante muito grande")
    )]
    pub manufacturer: String,
    #[serde(default, rename = "data_entrada", deserialize_with = "dates::deserialize_option")]
    #[validate(required(message = "Data de entrada do EPI obrigatória"))]
    pub entry_date: Option<NaiveDate>,
}

/// Update equipment request; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    #[serde(rename = "epi")]
    pub name: Option<String>,
    #[serde(rename = "CA")]
    pub certificate: Option<String>,
    #[serde(rename = "modo_uso")]
    pub usage_instructions: Option<String>,
    #[serde(default, rename = "validade", deserialize_with = "dates::deserialize_option")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(rename = "tipo")]
    pub category: Option<String>,
    #[serde(rename = "fabricante")]
    pub manufacturer: Option<String>,
    #[serde(default, rename = "data_entrada", deserialize_with = "dates::deserialize_option")]
    pub entry_date: Option<NaiveDate>,
}

impl UpdateEquipment {
    /// Overlay the requested changes on top of an existing record
    pub fn merge_into(self, current: &Equipment) -> CreateEquipment {
        CreateEquipment {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            certificate: self.certificate.unwrap_or_else(|| current.certificate.clone()),
            usage_instructions: self
                .usage_instructions
                .unwrap_or_else(|| current.usage_instructions.clone()),
            expiration_date: self.expiration_date.or(Some(current.expiration_date)),
            category: self.category.unwrap_or_else(|| current.category.clone()),
            manufacturer: self.manufacturer.unwrap_or_else(|| current.manufacturer.clone()),
            entry_date: self.entry_date.or(Some(current.entry_date)),
        }
    }
}

/// Expiration situation of a certificate relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationStatus {
    Expired,
    Warning,
    Valid,
}

impl ExpirationStatus {
    pub fn classify(days_remaining: i64, warning_days: i64) -> Self {
        if days_remaining < 0 {
            ExpirationStatus::Expired
        } else if days_remaining <= warning_days {
            ExpirationStatus::Warning
        } else {
            ExpirationStatus::Valid
        }
    }
}

impl Equipment {
    /// Validate a request and build the equipment it describes
    pub fn new(data: CreateEquipment) -> AppResult<Self> {
        data.validate()?;

        let certificate = data.certificate.trim();
        if RESERVED_CERTIFICATES.contains(&certificate) {
            return Err(AppError::Validation(format!(
                "Número de CA '{}' é reservado.",
                certificate
            )));
        }
        let certificate = certificate.to_string();

        let expiration_date = data
            .expiration_date
            .ok_or_else(|| AppError::Validation("Validade do EPI obrigatória".to_string()))?;
        let entry_date = data
            .entry_date
            .ok_or_else(|| AppError::Validation("Data de entrada do EPI obrigatória".to_string()))?;

        Ok(Self {
            name: data.name.trim().to_string(),
            certificate,
            usage_instructions: data.usage_instructions.trim().to_string(),
            expiration_date,
            category: data.category.trim().to_string(),
            manufacturer: data.manufacturer.trim().to_string(),
            entry_date,
        })
    }

    /// Calendar days until expiration; negative once expired
    pub fn days_until_expiration(&self, today: NaiveDate) -> i64 {
        (self.expiration_date - today).num_days()
    }

    pub fn expiration_status(&self, today: NaiveDate, warning_days: i64) -> ExpirationStatus {
        ExpirationStatus::classify(self.days_until_expiration(today), warning_days)
    }

    /// Whether the expiration date lies in `[today, today + days]`
    pub fn expires_within(&self, today: NaiveDate, days: i64) -> bool {
        if self.expiration_date < today {
            return false;
        }
        match Duration::try_days(days).and_then(|window| today.checked_add_signed(window)) {
            Some(limit) => self.expiration_date <= limit,
            // window beyond the calendar range
            None => days > 0,
        }
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date < today
    }
}

/// Summary line used by the expiration reports
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExpirationEntry {
    #[serde(rename = "Epi")]
    pub name: String,
    #[serde(rename = "CA")]
    pub certificate: String,
    #[serde(rename = "validade")]
    pub expiration_date: NaiveDate,
    #[serde(rename = "diasRestantes")]
    pub days_remaining: i64,
    #[serde(rename = "situacao")]
    pub status: ExpirationStatus,
}

impl ExpirationEntry {
    pub fn new(equipment: &Equipment, today: NaiveDate, warning_days: i64) -> Self {
        Self {
            name: equipment.name.clone(),
            certificate: equipment.certificate.clone(),
            expiration_date: equipment.expiration_date,
            days_remaining: equipment.days_until_expiration(today),
            status: equipment.expiration_status(today, warning_days),
        }
    }
}
