//! Equipment substitution history

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::equipment::{CreateEquipment, Equipment};

/// Delivery of replacement equipment to an employee. Append-only.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubstitutionRecord {
    pub id: Uuid,
    /// National ID of the employee
    #[serde(rename = "funcionario")]
    pub employee_id: String,
    /// Equipment as it was when delivered
    #[serde(rename = "epi")]
    pub equipment: Equipment,
    #[serde(rename = "dataEntrega")]
    pub delivered_at: DateTime<Utc>,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "dataVencimentoPrevisto")]
    pub expected_expiration: NaiveDate,
}

impl SubstitutionRecord {
    pub fn new(employee_id: &str, equipment: Equipment, reason: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.trim().to_string(),
            expected_expiration: equipment.expiration_date,
            equipment,
            delivered_at: Utc::now(),
            reason: reason.trim().to_string(),
        }
    }
}

/// Substitution request on the equipment routes
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubstitutionRequest {
    #[serde(rename = "identificadorFuncionario")]
    pub employee_id: Option<String>,
    #[serde(rename = "motivo")]
    pub reason: Option<String>,
    #[serde(rename = "novoEpi")]
    pub new_equipment: Option<CreateEquipment>,
}

/// Substitution request on an employee's routes
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmployeeSubstitutionRequest {
    #[serde(rename = "motivo")]
    pub reason: Option<String>,
    #[serde(rename = "novoEpi")]
    pub new_equipment: Option<CreateEquipment>,
}

/// Compact view of a recorded substitution
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubstitutionReceipt {
    #[serde(rename = "idRegistro")]
    pub id: Uuid,
    #[serde(rename = "funcionario")]
    pub employee_id: String,
    #[serde(rename = "epiCA")]
    pub certificate: String,
    #[serde(rename = "dataEntrega")]
    pub delivered_at: DateTime<Utc>,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "dataVencimentoPrevisto")]
    pub expected_expiration: NaiveDate,
}

impl From<&SubstitutionRecord> for SubstitutionReceipt {
    fn from(record: &SubstitutionRecord) -> Self {
        Self {
            id: record.id,
            employee_id: record.employee_id.clone(),
            certificate: record.equipment.certificate.clone(),
            delivered_at: record.delivered_at,
            reason: record.reason.clone(),
            expected_expiration: record.expected_expiration,
        }
    }
}
