//! Employees repository

use super::{Collection, Replace};
use crate::{
    error::{AppError, AppResult},
    models::Employee,
};

#[derive(Clone, Default)]
pub struct EmployeesRepository {
    items: Collection<Employee>,
}

fn not_found(national_id: &str) -> AppError {
    AppError::NotFound(format!("Funcionário com CPF {} não encontrado.", national_id))
}

fn duplicate(national_id: &str) -> AppError {
    AppError::Conflict(format!(
        "Já existe um funcionário cadastrado com o CPF '{}'.",
        national_id
    ))
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Employee> {
        self.items.all().await
    }

    pub async fn get_by_national_id(&self, national_id: &str) -> AppResult<Employee> {
        self.items
            .find(national_id)
            .await
            .ok_or_else(|| not_found(national_id))
    }

    pub async fn create(&self, employee: Employee) -> AppResult<Employee> {
        self.items
            .insert(employee)
            .await
            .map_err(|rejected| duplicate(&rejected.national_id))
    }

    pub async fn replace(&self, national_id: &str, employee: Employee) -> AppResult<Employee> {
        let new_national_id = employee.national_id.clone();
        match self.items.replace(national_id, employee).await {
            Replace::Replaced(employee) => Ok(employee),
            Replace::Missing => Err(not_found(national_id)),
            Replace::KeyTaken => Err(duplicate(&new_national_id)),
        }
    }

    pub async fn delete(&self, national_id: &str) -> bool {
        self.items.remove(national_id).await
    }
}
