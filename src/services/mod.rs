//! Business logic services

pub mod companies;
pub mod employees;
pub mod equipment;

use crate::{config::ExpirationConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub employees: employees::EmployeesService,
    pub companies: companies::CompaniesService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, expiration_config: ExpirationConfig) -> Self {
        let equipment = equipment::EquipmentService::new(repository.clone(), expiration_config);

        Self {
            employees: employees::EmployeesService::new(repository.clone(), equipment.clone()),
            equipment,
            companies: companies::CompaniesService::new(repository),
        }
    }
}
