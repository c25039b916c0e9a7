//! Employee (funcionário) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::not_blank;
use crate::error::AppResult;

/// Employee receiving protective equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    #[serde(rename = "nome")]
    pub name: String,
    /// National ID (CPF), natural key
    #[serde(rename = "cpf")]
    pub national_id: String,
    #[serde(rename = "setor")]
    pub department: String,
    #[serde(rename = "cargo")]
    pub role: String,
}

/// Create employee request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[serde(default, rename = "nome")]
    #[validate(
        custom(function = "not_blank", message = "Nome do funcionário obrigatório"),
        length(max = 100, message = "Nome muito grande")
    )]
    pub name: String,
    #[serde(default, rename = "cpf")]
    #[validate(
        custom(function = "not_blank", message = "CPF do funcionário obrigatório"),
        length(max = 11, message = "Necessário 11 dígitos")
    )]
    pub national_id: String,
    #[serde(default, rename = "setor")]
    #[validate(
        custom(function = "not_blank", message = "Setor do funcionário obrigatório"),
        length(max = 100, message = "Setor muito grande")
    )]
    pub department: String,
    #[serde(default, rename = "cargo")]
    #[validate(
        custom(function = "not_blank", message = "Cargo do funcionário obrigatório"),
        length(max = 100, message = "Cargo muito grande")
    )]
    pub role: String,
}

/// Update employee request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEmployee {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "cpf")]
    pub national_id: Option<String>,
    #[serde(rename = "setor")]
    pub department: Option<String>,
    #[serde(rename = "cargo")]
    pub role: Option<String>,
}

impl UpdateEmployee {
    pub fn merge_into(self, current: &Employee) -> CreateEmployee {
        CreateEmployee {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            national_id: self.national_id.unwrap_or_else(|| current.national_id.clone()),
            department: self.department.unwrap_or_else(|| current.department.clone()),
            role: self.role.unwrap_or_else(|| current.role.clone()),
        }
    }
}

impl Employee {
    pub fn new(data: CreateEmployee) -> AppResult<Self> {
        data.validate()?;

        Ok(Self {
            name: data.name.trim().to_string(),
            national_id: data.national_id.trim().to_string(),
            department: data.department.trim().to_string(),
            role: data.role.trim().to_string(),
        })
    }
}
