//! Employee management service

use crate::{
    error::AppResult,
    models::{
        employee::{CreateEmployee, Employee, UpdateEmployee},
        equipment::CreateEquipment,
        SubstitutionRecord,
    },
    repository::Repository,
};

use super::equipment::EquipmentService;

#[derive(Clone)]
pub struct EmployeesService {
    repository: Repository,
    equipment: EquipmentService,
}

impl EmployeesService {
    pub fn new(repository: Repository, equipment: EquipmentService) -> Self {
        Self {
            repository,
            equipment,
        }
    }

    pub async fn create(&self, data: CreateEmployee) -> AppResult<Employee> {
        let employee = Employee::new(data)?;
        let created = self.repository.employees.create(employee).await?;
        tracing::info!(cpf = %created.national_id, "employee registered");
        Ok(created)
    }

    pub async fn list(&self) -> Vec<Employee> {
        self.repository.employees.list().await
    }

    pub async fn find_by_national_id(&self, national_id: &str) -> AppResult<Employee> {
        self.repository
            .employees
            .get_by_national_id(national_id.trim())
            .await
    }

    pub async fn update(&self, national_id: &str, changes: UpdateEmployee) -> AppResult<Employee> {
        let current = self.find_by_national_id(national_id).await?;
        let updated = Employee::new(changes.merge_into(&current))?;
        let updated = self
            .repository
            .employees
            .replace(&current.national_id, updated)
            .await?;

        if updated.national_id != current.national_id {
            let moved = self
                .repository
                .substitutions
                .rekey_employee(&current.national_id, &updated.national_id)
                .await;
            tracing::debug!(moved, "substitution history moved to new CPF");
        }

        tracing::info!(cpf = %current.national_id, new_cpf = %updated.national_id, "employee updated");
        Ok(updated)
    }

    /// Remove an employee; false when the national ID is unknown.
    /// Substitution history is kept.
    pub async fn remove(&self, national_id: &str) -> bool {
        let removed = self.repository.employees.delete(national_id.trim()).await;
        if removed {
            tracing::info!(cpf = %national_id, "employee removed");
        }
        removed
    }

    /// Record a substitution for a registered employee
    pub async fn substitute_equipment(
        &self,
        national_id: &str,
        new_equipment: CreateEquipment,
        reason: &str,
    ) -> AppResult<SubstitutionRecord> {
        let employee = self.find_by_national_id(national_id).await?;
        self.equipment
            .record_substitution(&employee.national_id, new_equipment, reason)
            .await
    }

    /// Substitution history of a registered employee
    pub async fn history(&self, national_id: &str) -> AppResult<Vec<SubstitutionRecord>> {
        let employee = self.find_by_national_id(national_id).await?;
        Ok(self.equipment.history(&employee.national_id).await)
    }
}
