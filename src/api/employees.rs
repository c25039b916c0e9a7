//! Employee (funcionário) API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        employee::{CreateEmployee, Employee, UpdateEmployee},
        substitution::{EmployeeSubstitutionRequest, SubstitutionReceipt, SubstitutionRecord},
    },
};

use super::{
    equipment::{StatusResponse, SubstitutionResponse},
    required_param, ApiJson,
};

/// Confirmation returned after saving an employee
#[derive(Serialize, ToSchema)]
pub struct EmployeeSaved {
    pub status: String,
    pub dados: Employee,
}

#[derive(Deserialize)]
pub struct NationalIdQuery {
    pub cpf: Option<String>,
}

/// List all employees
#[utoipa::path(
    get,
    path = "/funcionarios",
    tag = "funcionarios",
    responses(
        (status = 200, description = "Employee list", body = Vec<Employee>)
    )
)]
pub async fn list_employees(State(state): State<crate::AppState>) -> Json<Vec<Employee>> {
    Json(state.services.employees.list().await)
}

/// Register an employee
#[utoipa::path(
    post,
    path = "/funcionarios",
    tag = "funcionarios",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee registered", body = EmployeeSaved),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "National ID already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateEmployee>,
) -> AppResult<(StatusCode, Json<EmployeeSaved>)> {
    let employee = state.services.employees.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(EmployeeSaved {
            status: "Funcionário cadastrado com sucesso".to_string(),
            dados: employee,
        }),
    ))
}

/// Search an employee by national ID
#[utoipa::path(
    get,
    path = "/funcionarios/buscar",
    tag = "funcionarios",
    params(("cpf" = String, Query, description = "National ID (CPF)")),
    responses(
        (status = 200, description = "Employee details", body = Employee),
        (status = 400, description = "Missing search parameter", body = crate::error::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_employee(
    State(state): State<crate::AppState>,
    Query(query): Query<NationalIdQuery>,
) -> AppResult<Json<Employee>> {
    let cpf = required_param(query.cpf, "cpf")?;
    let employee = state.services.employees.find_by_national_id(&cpf).await?;
    Ok(Json(employee))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/funcionarios/{cpf}",
    tag = "funcionarios",
    params(("cpf" = String, Path, description = "National ID (CPF)")),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeSaved),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse),
        (status = 409, description = "New national ID already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<crate::AppState>,
    Path(cpf): Path<String>,
    ApiJson(changes): ApiJson<UpdateEmployee>,
) -> AppResult<Json<EmployeeSaved>> {
    let employee = state.services.employees.update(&cpf, changes).await?;
    Ok(Json(EmployeeSaved {
        status: "Funcionário atualizado com sucesso".to_string(),
        dados: employee,
    }))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/funcionarios/{cpf}",
    tag = "funcionarios",
    params(("cpf" = String, Path, description = "National ID (CPF)")),
    responses(
        (status = 200, description = "Employee removed", body = StatusResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<crate::AppState>,
    Path(cpf): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    if !state.services.employees.remove(&cpf).await {
        return Err(AppError::NotFound(format!(
            "Funcionário com CPF {} não encontrado.",
            cpf
        )));
    }
    Ok(Json(StatusResponse {
        status: format!("Funcionário com CPF '{}' removido com sucesso.", cpf),
    }))
}

/// Substitution history of an employee
#[utoipa::path(
    get,
    path = "/funcionarios/{cpf}/historico",
    tag = "funcionarios",
    params(("cpf" = String, Path, description = "National ID (CPF)")),
    responses(
        (status = 200, description = "Substitution history, oldest first", body = Vec<SubstitutionRecord>),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_history(
    State(state): State<crate::AppState>,
    Path(cpf): Path<String>,
) -> AppResult<Json<Vec<SubstitutionRecord>>> {
    let history = state.services.employees.history(&cpf).await?;
    Ok(Json(history))
}

/// Deliver replacement equipment to a registered employee
#[utoipa::path(
    post,
    path = "/funcionarios/{cpf}/substituicao",
    tag = "funcionarios",
    params(("cpf" = String, Path, description = "National ID (CPF)")),
    request_body = EmployeeSubstitutionRequest,
    responses(
        (status = 200, description = "Substitution recorded", body = SubstitutionResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn substitute_equipment(
    State(state): State<crate::AppState>,
    Path(cpf): Path<String>,
    ApiJson(request): ApiJson<EmployeeSubstitutionRequest>,
) -> AppResult<Json<SubstitutionResponse>> {
    let (Some(reason), Some(new_equipment)) = (request.reason, request.new_equipment) else {
        return Err(AppError::BadRequest(
            "Motivo e novoEPI são obrigatórios.".to_string(),
        ));
    };

    let record = state
        .services
        .employees
        .substitute_equipment(&cpf, new_equipment, &reason)
        .await?;

    Ok(Json(SubstitutionResponse {
        status: "Substituição registrada com sucesso".to_string(),
        dados: SubstitutionReceipt::from(&record),
    }))
}
