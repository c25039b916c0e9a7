//! Company (empresa) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::not_blank;
use crate::error::AppResult;

/// Registered company account
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Company {
    #[serde(rename = "empresa")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
    /// Tax ID (CNPJ)
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    /// Login key
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip)]
    pub password_hash: String,
}

/// Company registration request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateCompany {
    #[serde(default, rename = "empresa")]
    #[validate(
        custom(function = "not_blank", message = "Nome da empresa obrigatório"),
        length(max = 100, message = "Nome da empresa muito grande")
    )]
    pub name: String,
    #[serde(default, rename = "endereco")]
    #[validate(
        custom(function = "not_blank", message = "Endereço obrigatório"),
        length(max = 100, message = "Endereço muito grande")
    )]
    pub address: String,
    #[serde(default, rename = "cnpj")]
    #[validate(
        custom(function = "not_blank", message = "CNPJ da empresa obrigatório"),
        length(max = 100, message = "CNPJ muito grande")
    )]
    pub tax_id: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Email obrigatório"),
        email(message = "Email inválido"),
        length(max = 100, message = "Email muito grande")
    )]
    pub email: String,
    #[serde(default, rename = "senha")]
    #[validate(length(min = 7, message = "Senha muito curta"))]
    pub password: String,
}

/// Company login request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CompanyLogin {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "senha")]
    pub password: String,
}

impl Company {
    /// Validate a registration and build the company, hashing the password
    /// only once everything else checks out
    pub fn new<H>(data: CreateCompany, hash_password: H) -> AppResult<Self>
    where
        H: FnOnce(&str) -> AppResult<String>,
    {
        data.validate()?;
        let password_hash = hash_password(&data.password)?;

        Ok(Self {
            name: data.name.trim().to_string(),
            address: data.address.trim().to_string(),
            tax_id: data.tax_id.trim().to_string(),
            email: data.email.trim().to_lowercase(),
            password_hash,
        })
    }
}
