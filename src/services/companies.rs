//! Company registration and credential checks

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::company::{Company, CreateCompany},
    repository::Repository,
};

const INVALID_CREDENTIALS: &str = "Email ou senha inválidos";

#[derive(Clone)]
pub struct CompaniesService {
    repository: Repository,
}

impl CompaniesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a company, storing only the password hash
    pub async fn register(&self, data: CreateCompany) -> AppResult<Company> {
        let company = Company::new(data, hash_password)?;
        let created = self.repository.companies.create(company).await?;
        tracing::info!(email = %created.email, "company registered");
        Ok(created)
    }

    /// Check a company's credentials. No session is created.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<Company> {
        let company = self
            .repository
            .companies
            .get_by_email(email)
            .await
            .ok_or_else(|| AppError::Authentication(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&company.password_hash, password)? {
            tracing::warn!(email = %company.email, "failed company login");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        Ok(company)
    }

    pub async fn list(&self) -> Vec<Company> {
        self.repository.companies.list().await
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Company> {
        self.repository
            .companies
            .get_by_email(email)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Empresa com email '{}' não encontrada.", email)))
    }
}

/// Hash a password using Argon2
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
