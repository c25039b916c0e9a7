//! Companies repository

use super::Collection;
use crate::{
    error::{AppError, AppResult},
    models::Company,
};

#[derive(Clone, Default)]
pub struct CompaniesRepository {
    items: Collection<Company>,
}

impl CompaniesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Company> {
        self.items.all().await
    }

    /// Emails are stored lowercased
    pub async fn get_by_email(&self, email: &str) -> Option<Company> {
        self.items.find(&email.trim().to_lowercase()).await
    }

    pub async fn create(&self, company: Company) -> AppResult<Company> {
        self.items.insert(company).await.map_err(|rejected| {
            AppError::Conflict(format!(
                "Já existe uma empresa cadastrada com o email '{}'.",
                rejected.email
            ))
        })
    }
}
