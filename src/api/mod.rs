//! API handlers for the EPI REST endpoints

pub mod companies;
pub mod employees;
pub mod equipment;
pub mod health;
pub mod openapi;

use axum::{
    extract::FromRequest,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// JSON body extractor whose rejections use the application error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Non-blank query parameter, or the search usage error
pub(crate) fn required_param(value: Option<String>, name: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest(format!("Parâmetro de busca inválido. Use: {}.", name))
        })
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Equipment
        .route("/epis", get(equipment::list_equipment))
        .route("/epis", post(equipment::create_equipment))
        .route("/epis/ca/:ca", get(equipment::get_equipment))
        .route("/epis/buscar/ca", get(equipment::search_equipment))
        .route("/epis/vencimento", get(equipment::list_expiring))
        .route("/epis/vencidas", get(equipment::list_expired))
        .route("/epis/substituicao", post(equipment::record_substitution))
        .route("/epis/:ca", put(equipment::update_equipment))
        .route("/epis/:ca", delete(equipment::delete_equipment))
        // Employees
        .route("/funcionarios", get(employees::list_employees))
        .route("/funcionarios", post(employees::create_employee))
        .route("/funcionarios/buscar", get(employees::search_employee))
        .route("/funcionarios/:cpf", put(employees::update_employee))
        .route("/funcionarios/:cpf", delete(employees::delete_employee))
        .route("/funcionarios/:cpf/historico", get(employees::get_history))
        .route("/funcionarios/:cpf/substituicao", post(employees::substitute_equipment))
        // Companies
        .route("/empresas", get(companies::list_companies))
        .route("/empresas", post(companies::register_company))
        .route("/empresas/login", post(companies::login))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
