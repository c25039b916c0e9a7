//! Company (empresa) API endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::company::{Company, CompanyLogin, CreateCompany},
};

use super::ApiJson;

#[derive(Serialize, ToSchema)]
pub struct CompanyResponse {
    pub status: String,
    pub dados: Company,
}

/// List registered companies
#[utoipa::path(
    get,
    path = "/empresas",
    tag = "empresas",
    responses(
        (status = 200, description = "Company list", body = Vec<Company>)
    )
)]
pub async fn list_companies(State(state): State<crate::AppState>) -> Json<Vec<Company>> {
    Json(state.services.companies.list().await)
}

/// Register a company
#[utoipa::path(
    post,
    path = "/empresas",
    tag = "empresas",
    request_body = CreateCompany,
    responses(
        (status = 201, description = "Company registered", body = CompanyResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_company(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateCompany>,
) -> AppResult<(StatusCode, Json<CompanyResponse>)> {
    let company = state.services.companies.register(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CompanyResponse {
            status: "Empresa cadastrada com sucesso".to_string(),
            dados: company,
        }),
    ))
}

/// Check company credentials
#[utoipa::path(
    post,
    path = "/empresas/login",
    tag = "empresas",
    request_body = CompanyLogin,
    responses(
        (status = 200, description = "Credentials accepted", body = CompanyResponse),
        (status = 401, description = "Invalid email or password", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    ApiJson(credentials): ApiJson<CompanyLogin>,
) -> AppResult<Json<CompanyResponse>> {
    let company = state
        .services
        .companies
        .authenticate(&credentials.email, &credentials.password)
        .await?;
    Ok(Json(CompanyResponse {
        status: "Login realizado com sucesso".to_string(),
        dados: company,
    }))
}
