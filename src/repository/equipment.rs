//! Equipment repository

use chrono::NaiveDate;

use super::{Collection, Replace};
use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment},
};

#[derive(Clone, Default)]
pub struct EquipmentRepository {
    items: Collection<Equipment>,
}

fn not_found(certificate: &str) -> AppError {
    AppError::NotFound(format!("EPI com CA '{}' não encontrado.", certificate))
}

fn duplicate(certificate: &str) -> AppError {
    AppError::Conflict(format!("Já existe um EPI cadastrado com o CA '{}'.", certificate))
}

impl EquipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all equipment in registration order
    pub async fn list(&self) -> Vec<Equipment> {
        self.items.all().await
    }

    /// Get equipment by certificate number
    pub async fn get_by_certificate(&self, certificate: &str) -> AppResult<Equipment> {
        self.items
            .find(certificate)
            .await
            .ok_or_else(|| not_found(certificate))
    }

    /// Store new equipment
    pub async fn create(&self, equipment: Equipment) -> AppResult<Equipment> {
        self.items
            .insert(equipment)
            .await
            .map_err(|rejected| duplicate(&rejected.certificate))
    }

    /// Replace the equipment registered under `certificate`
    pub async fn replace(&self, certificate: &str, equipment: Equipment) -> AppResult<Equipment> {
        let new_certificate = equipment.certificate.clone();
        match self.items.replace(certificate, equipment).await {
            Replace::Replaced(equipment) => Ok(equipment),
            Replace::Missing => Err(not_found(certificate)),
            Replace::KeyTaken => Err(duplicate(&new_certificate)),
        }
    }

    /// Delete equipment; false when nothing matched
    pub async fn delete(&self, certificate: &str) -> bool {
        self.items.remove(certificate).await
    }

    /// Existing equipment for the request's certificate, or a newly created one
    pub async fn find_or_create(&self, data: CreateEquipment) -> AppResult<(Equipment, bool)> {
        let certificate = data.certificate.trim().to_string();
        self.items
            .find_or_insert_with(&certificate, || Equipment::new(data))
            .await
    }

    /// Equipment expiring in `[today, today + days]`
    pub async fn list_expiring(&self, today: NaiveDate, days: i64) -> Vec<Equipment> {
        self.items
            .filter(|equipment| equipment.expires_within(today, days))
            .await
    }

    /// Equipment already past its expiration date
    pub async fn list_expired(&self, today: NaiveDate) -> Vec<Equipment> {
        self.items
            .filter(|equipment| equipment.is_expired(today))
            .await
    }
}
