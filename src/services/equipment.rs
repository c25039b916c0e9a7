//! Equipment lifecycle service: registration, expiration tracking and
//! substitution history

use crate::{
    config::ExpirationConfig,
    error::{AppError, AppResult},
    models::{
        dates,
        equipment::{CreateEquipment, Equipment, ExpirationEntry, UpdateEquipment},
        SubstitutionRecord,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    config: ExpirationConfig,
}

impl EquipmentService {
    pub fn new(repository: Repository, config: ExpirationConfig) -> Self {
        Self { repository, config }
    }

    /// Validate and register new equipment
    pub async fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        let equipment = Equipment::new(data)?;
        let created = self.repository.equipment.create(equipment).await?;
        tracing::info!(ca = %created.certificate, "EPI registered");
        Ok(created)
    }

    pub async fn list(&self) -> Vec<Equipment> {
        self.repository.equipment.list().await
    }

    pub async fn find_by_certificate(&self, certificate: &str) -> AppResult<Equipment> {
        self.repository
            .equipment
            .get_by_certificate(certificate.trim())
            .await
    }

    /// Apply a partial update; the merged record is validated again and
    /// replaces the stored one, possibly under a new certificate number
    pub async fn update(&self, certificate: &str, changes: UpdateEquipment) -> AppResult<Equipment> {
        let current = self.find_by_certificate(certificate).await?;
        let updated = Equipment::new(changes.merge_into(&current))?;
        let updated = self
            .repository
            .equipment
            .replace(&current.certificate, updated)
            .await?;

        tracing::info!(ca = %current.certificate, new_ca = %updated.certificate, "EPI updated");
        Ok(updated)
    }

    /// Remove equipment; false when the certificate is unknown
    pub async fn remove(&self, certificate: &str) -> bool {
        let removed = self.repository.equipment.delete(certificate.trim()).await;
        if removed {
            tracing::info!(ca = %certificate, "EPI removed");
        }
        removed
    }

    /// Window applied when the client does not choose one
    pub fn default_window_days(&self) -> i64 {
        self.config.default_window_days
    }

    /// Equipment whose expiration date falls within `[today, today + days]`
    pub async fn expiring_within(&self, days: i64) -> AppResult<Vec<Equipment>> {
        if days <= 0 {
            return Err(AppError::Validation(
                "diasLimite deve ser um número positivo.".to_string(),
            ));
        }
        let expiring = self
            .repository
            .equipment
            .list_expiring(dates::today(), days)
            .await;
        tracing::debug!(days, found = expiring.len(), "expiring EPI query");
        Ok(expiring)
    }

    /// Equipment already past its expiration date
    pub async fn expired(&self) -> Vec<Equipment> {
        self.repository.equipment.list_expired(dates::today()).await
    }

    /// Days remaining and status for each equipment, as of today
    pub fn expiration_entries(&self, equipment: &[Equipment]) -> Vec<ExpirationEntry> {
        let today = dates::today();
        equipment
            .iter()
            .map(|item| ExpirationEntry::new(item, today, self.config.warning_days))
            .collect()
    }

    /// Deliver equipment to an employee and log it to the history.
    ///
    /// The equipment is looked up by the request's certificate number and
    /// registered first when unknown.
    pub async fn record_substitution(
        &self,
        employee_id: &str,
        new_equipment: CreateEquipment,
        reason: &str,
    ) -> AppResult<SubstitutionRecord> {
        if employee_id.trim().is_empty() {
            return Err(AppError::Validation(
                "Identificador do funcionário obrigatório".to_string(),
            ));
        }
        if reason.trim().is_empty() {
            return Err(AppError::Validation(
                "Motivo da substituição obrigatório".to_string(),
            ));
        }

        let (equipment, created) = self
            .repository
            .equipment
            .find_or_create(new_equipment)
            .await?;
        if created {
            tracing::info!(ca = %equipment.certificate, "EPI registered during substitution");
        }

        let record = self
            .repository
            .substitutions
            .append(SubstitutionRecord::new(employee_id, equipment, reason))
            .await;

        tracing::info!(
            id = %record.id,
            employee = %record.employee_id,
            ca = %record.equipment.certificate,
            "EPI substitution recorded"
        );
        Ok(record)
    }

    /// Substitution history of one employee, oldest first
    pub async fn history(&self, employee_id: &str) -> Vec<SubstitutionRecord> {
        self.repository
            .substitutions
            .list_for_employee(employee_id.trim())
            .await
    }
}
