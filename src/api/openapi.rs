//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{companies, employees, equipment, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EPI API",
        version = "1.0.0",
        description = "Personal protective equipment tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Equipment
        equipment::list_equipment,
        equipment::create_equipment,
        equipment::get_equipment,
        equipment::search_equipment,
        equipment::list_expiring,
        equipment::list_expired,
        equipment::record_substitution,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Employees
        employees::list_employees,
        employees::create_employee,
        employees::search_employee,
        employees::update_employee,
        employees::delete_employee,
        employees::get_history,
        employees::substitute_equipment,
        // Companies
        companies::list_companies,
        companies::register_company,
        companies::login,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::ExpirationStatus,
            crate::models::equipment::ExpirationEntry,
            equipment::EquipmentSaved,
            equipment::StatusResponse,
            equipment::ExpirationReport,
            equipment::SubstitutionResponse,
            // Substitutions
            crate::models::substitution::SubstitutionRecord,
            crate::models::substitution::SubstitutionRequest,
            crate::models::substitution::EmployeeSubstitutionRequest,
            crate::models::substitution::SubstitutionReceipt,
            // Employees
            crate::models::employee::Employee,
            crate::models::employee::CreateEmployee,
            crate::models::employee::UpdateEmployee,
            employees::EmployeeSaved,
            // Companies
            crate::models::company::Company,
            crate::models::company::CreateCompany,
            crate::models::company::CompanyLogin,
            companies::CompanyResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "epis", description = "Protective equipment management"),
        (name = "funcionarios", description = "Employee management"),
        (name = "empresas", description = "Company registration and login")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
