//! Equipment (EPI) API endpoints

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
        equipment::{CreateEquipment, Equipment, ExpirationEntry, UpdateEquipment},
        substitution::{SubstitutionReceipt, SubstitutionRequest},
    },
};

use super::{required_param, ApiJson};

const INVALID_WINDOW: &str = "diasLimite deve ser um número positivo.";

/// Integer formed by the leading sign and digits of `raw`, ignoring the rest
/// (`"30abc"` reads as 30, `"1.5"` as 1)
fn leading_integer(raw: &str) -> Option<i64> {
    let digits_start = usize::from(raw.starts_with(['-', '+']));
    let digits_end = raw[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(raw.len(), |end| digits_start + end);
    if digits_end == digits_start {
        return None;
    }
    raw[..digits_end].parse().ok()
}

/// Confirmation returned after saving equipment
#[derive(Serialize, ToSchema)]
pub struct EquipmentSaved {
    pub status: String,
    #[serde(rename = "CA")]
    pub certificate: String,
    pub dados: Equipment,
}

#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Expiration report
#[derive(Serialize, ToSchema)]
pub struct ExpirationReport {
    pub mensagem: String,
    pub data: Vec<ExpirationEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct SubstitutionResponse {
    pub status: String,
    pub dados: SubstitutionReceipt,
}

#[derive(Deserialize)]
pub struct ExpiringQuery {
    #[serde(rename = "diasLimite")]
    pub days: Option<String>,
}

#[derive(Deserialize)]
pub struct CertificateQuery {
    pub ca: Option<String>,
}

/// List all equipment
#[utoipa::path(
    get,
    path = "/epis",
    tag = "epis",
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(State(state): State<crate::AppState>) -> Json<Vec<Equipment>> {
    Json(state.services.equipment.list().await)
}

/// Register equipment
#[utoipa::path(
    post,
    path = "/epis",
    tag = "epis",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment registered", body = EquipmentSaved),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Certificate already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateEquipment>,
) -> AppResult<(StatusCode, Json<EquipmentSaved>)> {
    let equipment = state.services.equipment.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(EquipmentSaved {
            status: "EPI cadastrado com sucesso".to_string(),
            certificate: equipment.certificate.clone(),
            dados: equipment,
        }),
    ))
}

/// Get equipment by certificate number
#[utoipa::path(
    get,
    path = "/epis/ca/{ca}",
    tag = "epis",
    params(("ca" = String, Path, description = "Certificate number")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(ca): Path<String>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.find_by_certificate(&ca).await?;
    Ok(Json(equipment))
}

/// Search equipment by certificate number
#[utoipa::path(
    get,
    path = "/epis/buscar/ca",
    tag = "epis",
    params(("ca" = String, Query, description = "Certificate number")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 400, description = "Missing search parameter", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<CertificateQuery>,
) -> AppResult<Json<Equipment>> {
    let ca = required_param(query.ca, "ca")?;
    let equipment = state
        .services
        .equipment
        .find_by_certificate(&ca)
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => {
                AppError::NotFound("EPI não encontrado com o CA fornecido.".to_string())
            }
            other => other,
        })?;
    Ok(Json(equipment))
}

/// Equipment expiring within the next `diasLimite` days
#[utoipa::path(
    get,
    path = "/epis/vencimento",
    tag = "epis",
    params(("diasLimite" = Option<i64>, Query, description = "Window in days (default 90)")),
    responses(
        (status = 200, description = "Expiring equipment", body = ExpirationReport),
        (status = 400, description = "Invalid window", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_expiring(
    State(state): State<crate::AppState>,
    Query(query): Query<ExpiringQuery>,
) -> AppResult<Json<ExpirationReport>> {
    let service = &state.services.equipment;

    let days = match query.days.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => leading_integer(raw)
            .ok_or_else(|| AppError::Validation(INVALID_WINDOW.to_string()))?,
        None => service.default_window_days(),
    };

    let expiring = service.expiring_within(days).await?;
    Ok(Json(ExpirationReport {
        mensagem: format!("Epi com validade do CA vencendo nos próximos {} dias.", days),
        data: service.expiration_entries(&expiring),
    }))
}

/// Equipment past its expiration date
#[utoipa::path(
    get,
    path = "/epis/vencidas",
    tag = "epis",
    responses(
        (status = 200, description = "Expired equipment", body = ExpirationReport)
    )
)]
pub async fn list_expired(State(state): State<crate::AppState>) -> Json<ExpirationReport> {
    let service = &state.services.equipment;
    let expired = service.expired().await;
    Json(ExpirationReport {
        mensagem: format!("{} EPI(s) com validade do CA vencida.", expired.len()),
        data: service.expiration_entries(&expired),
    })
}

/// Record an equipment substitution for an employee
#[utoipa::path(
    post,
    path = "/epis/substituicao",
    tag = "epis",
    request_body = SubstitutionRequest,
    responses(
        (status = 200, description = "Substitution recorded", body = SubstitutionResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn record_substitution(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<SubstitutionRequest>,
) -> AppResult<Json<SubstitutionResponse>> {
    let (Some(employee_id), Some(reason), Some(new_equipment)) =
        (request.employee_id, request.reason, request.new_equipment)
    else {
        return Err(AppError::BadRequest(
            "Dados de funcionário, motivo e novoEPI são obrigatórios.".to_string(),
        ));
    };

    let record = state
        .services
        .equipment
        .record_substitution(&employee_id, new_equipment, &reason)
        .await?;

    Ok(Json(SubstitutionResponse {
        status: "Substituição registrada com sucesso".to_string(),
        dados: SubstitutionReceipt::from(&record),
    }))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/epis/{ca}",
    tag = "epis",
    params(("ca" = String, Path, description = "Certificate number")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentSaved),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse),
        (status = 409, description = "New certificate already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(ca): Path<String>,
    ApiJson(changes): ApiJson<UpdateEquipment>,
) -> AppResult<Json<EquipmentSaved>> {
    let equipment = state.services.equipment.update(&ca, changes).await?;
    Ok(Json(EquipmentSaved {
        status: "EPI atualizado com sucesso".to_string(),
        certificate: equipment.certificate.clone(),
        dados: equipment,
    }))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/epis/{ca}",
    tag = "epis",
    params(("ca" = String, Path, description = "Certificate number")),
    responses(
        (status = 200, description = "Equipment removed", body = StatusResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(ca): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    if !state.services.equipment.remove(&ca).await {
        return Err(AppError::NotFound(format!(
            "EPI com CA '{}' não encontrado para remoção.",
            ca
        )));
    }
    Ok(Json(StatusResponse {
        status: format!("EPI com CA '{}' removido com sucesso.", ca),
    }))
}
