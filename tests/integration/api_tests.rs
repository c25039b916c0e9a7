//! API integration tests
//!
//! Each test drives a fresh router in-process, so they run without a server.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Local};
use serde_json::{json, Value};
use tower::ServiceExt;

use epi_server::{api, AppConfig, AppState};

fn app() -> Router {
    api::router(AppState::new(AppConfig::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn date_in(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

fn equipment(ca: &str, expires_in_days: i64) -> Value {
    json!({
        "epi": "Luva nitrílica",
        "CA": ca,
        "modo_uso": "Usar no manuseio de produtos químicos",
        "validade": date_in(expires_in_days),
        "tipo": "Proteção das mãos",
        "fabricante": "Danny",
        "data_entrada": date_in(-10)
    })
}

fn employee(cpf: &str) -> Value {
    json!({
        "nome": "Maria Souza",
        "cpf": cpf,
        "setor": "Almoxarifado",
        "cargo": "Auxiliar"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_and_get_equipment() {
    let app = app();

    let (status, body) = send(&app, "POST", "/epis", Some(equipment("12345", 200))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "EPI cadastrado com sucesso");
    assert_eq!(body["CA"], "12345");
    assert_eq!(body["dados"]["epi"], "Luva nitrílica");

    let (status, body) = send(&app, "GET", "/epis/ca/12345", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fabricante"], "Danny");
    assert_eq!(body["validade"], date_in(200));

    let (status, body) = send(&app, "GET", "/epis", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_equipment_validation() {
    let app = app();

    let mut invalid = equipment("12345", 200);
    invalid["epi"] = json!("   ");
    let (status, body) = send(&app, "POST", "/epis", Some(invalid)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["erro"], "Nome do EPI obrigatório");
    assert_eq!(body["mensagem"], body["erro"]);

    let (status, body) = send(&app, "POST", "/epis", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].as_str().unwrap().contains("Número de CA obrigatório"));

    let (_, list) = send(&app, "GET", "/epis", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/epis")
        .header("content-type", "application/json")
        .body(Body::from("{\"epi\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_certificate_conflict() {
    let app = app();
    send(&app, "POST", "/epis", Some(equipment("777", 200))).await;

    let (status, body) = send(&app, "POST", "/epis", Some(equipment("777", 50))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["codigo"], 4);
}

#[tokio::test]
async fn test_equipment_not_found() {
    let app = app();

    let (status, body) = send(&app, "GET", "/epis/ca/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["erro"], "EPI com CA '999' não encontrado.");

    let (status, body) = send(&app, "GET", "/epis/buscar/ca?ca=999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["erro"], "EPI não encontrado com o CA fornecido.");
}

#[tokio::test]
async fn test_search_requires_certificate() {
    let app = app();
    send(&app, "POST", "/epis", Some(equipment("555", 200))).await;

    let (status, body) = send(&app, "GET", "/epis/buscar/ca", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["erro"], "Parâmetro de busca inválido. Use: ca.");

    let (status, body) = send(&app, "GET", "/epis/buscar/ca?ca=555", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["CA"], "555");
}

#[tokio::test]
async fn test_expiring_window() {
    let app = app();
    send(&app, "POST", "/epis", Some(equipment("10", 10))).await;
    send(&app, "POST", "/epis", Some(equipment("80", 80))).await;
    send(&app, "POST", "/epis", Some(equipment("200", 200))).await;
    send(&app, "POST", "/epis", Some(equipment("old", -5))).await;

    // Default window is 90 days
    let (status, body) = send(&app, "GET", "/epis/vencimento", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["mensagem"],
        "Epi com validade do CA vencendo nos próximos 90 dias."
    );
    let certificates: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["CA"].as_str().unwrap())
        .collect();
    assert_eq!(certificates, vec!["10", "80"]);
    assert_eq!(body["data"][0]["diasRestantes"], 10);
    assert_eq!(body["data"][0]["situacao"], "warning");

    let (_, body) = send(&app, "GET", "/epis/vencimento?diasLimite=30", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_expiring_window_rejects_invalid_days() {
    let app = app();

    for query in ["diasLimite=abc", "diasLimite=0", "diasLimite=-3", "diasLimite=.5"] {
        let (status, body) = send(&app, "GET", &format!("/epis/vencimento?{}", query), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", query);
        assert_eq!(body["erro"], "diasLimite deve ser um número positivo.");
    }
}

#[tokio::test]
async fn test_expired_equipment() {
    let app = app();
    send(&app, "POST", "/epis", Some(equipment("old", -5))).await;
    send(&app, "POST", "/epis", Some(equipment("new", 60))).await;

    let (status, body) = send(&app, "GET", "/epis/vencidas", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["CA"], "old");
    assert_eq!(body["data"][0]["situacao"], "expired");
}

#[tokio::test]
async fn test_substitution_creates_equipment_and_history() {
    let app = app();
    send(&app, "POST", "/funcionarios", Some(employee("12345678901"))).await;

    let request = json!({
        "identificadorFuncionario": "12345678901",
        "motivo": "Luva rasgada",
        "novoEpi": equipment("4321", 300)
    });
    let (status, body) = send(&app, "POST", "/epis/substituicao", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dados"]["epiCA"], "4321");
    assert_eq!(body["dados"]["funcionario"], "12345678901");
    assert_eq!(body["dados"]["dataVencimentoPrevisto"], date_in(300));

    let (status, _) = send(&app, "GET", "/epis/ca/4321", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/funcionarios/12345678901/historico", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["motivo"], "Luva rasgada");
    assert_eq!(body[0]["epi"]["CA"], "4321");
}

#[tokio::test]
async fn test_substitution_requires_all_parts() {
    let app = app();

    let request = json!({
        "identificadorFuncionario": "12345678901",
        "novoEpi": equipment("4321", 300)
    });
    let (status, body) = send(&app, "POST", "/epis/substituicao", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["erro"],
        "Dados de funcionário, motivo e novoEPI são obrigatórios."
    );

    let (_, list) = send(&app, "GET", "/epis", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_and_delete_equipment() {
    let app = app();
    send(&app, "POST", "/epis", Some(equipment("100", 200))).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/epis/100",
        Some(json!({ "fabricante": "3M", "CA": "101" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["CA"], "101");
    assert_eq!(body["dados"]["fabricante"], "3M");
    assert_eq!(body["dados"]["epi"], "Luva nitrílica");

    let (status, _) = send(&app, "GET", "/epis/ca/100", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/epis/101", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "EPI com CA '101' removido com sucesso.");

    let (status, body) = send(&app, "DELETE", "/epis/101", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["erro"], "EPI com CA '101' não encontrado para remoção.");
}

#[tokio::test]
async fn test_employee_lifecycle() {
    let app = app();

    let (status, body) = send(&app, "POST", "/funcionarios", Some(employee("11122233344"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["dados"]["cpf"], "11122233344");

    let (status, _) = send(&app, "POST", "/funcionarios", Some(employee("11122233344"))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, "GET", "/funcionarios/buscar?cpf=11122233344", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nome"], "Maria Souza");

    let (status, _) = send(&app, "GET", "/funcionarios/buscar", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "PUT",
        "/funcionarios/11122233344",
        Some(json!({ "cargo": "Supervisora" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dados"]["cargo"], "Supervisora");
    assert_eq!(body["dados"]["setor"], "Almoxarifado");

    let (status, _) = send(&app, "DELETE", "/funcionarios/11122233344", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/funcionarios/buscar?cpf=11122233344", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employee_validation() {
    let app = app();

    let (status, body) = send(&app, "POST", "/funcionarios", Some(employee("123456789012"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["erro"], "Necessário 11 dígitos");
}

#[tokio::test]
async fn test_employee_routes_require_registered_employee() {
    let app = app();

    let (status, _) = send(&app, "GET", "/funcionarios/00000000000/historico", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = json!({ "motivo": "Desgaste", "novoEpi": equipment("9", 100) });
    let (status, _) = send(
        &app,
        "POST",
        "/funcionarios/00000000000/substituicao",
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/epis", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_employee_substitution_route() {
    let app = app();
    send(&app, "POST", "/funcionarios", Some(employee("55566677788"))).await;

    let (status, _) = send(
        &app,
        "POST",
        "/funcionarios/55566677788/substituicao",
        Some(json!({ "novoEpi": equipment("9", 100) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = json!({ "motivo": "Desgaste", "novoEpi": equipment("9", 100) });
    let (status, body) = send(
        &app,
        "POST",
        "/funcionarios/55566677788/substituicao",
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dados"]["epiCA"], "9");
    assert_eq!(body["dados"]["motivo"], "Desgaste");
}

#[tokio::test]
async fn test_company_register_and_login() {
    let app = app();
    let company = json!({
        "empresa": "Metalúrgica Silva",
        "endereco": "Rua das Flores, 100",
        "cnpj": "12345678000199",
        "email": "Contato@Silva.com.br",
        "senha": "segredo123"
    });

    let (status, body) = send(&app, "POST", "/empresas", Some(company.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["dados"]["email"], "contato@silva.com.br");
    assert!(body["dados"].get("senha").is_none());
    assert!(body["dados"].get("password_hash").is_none());

    let (status, _) = send(&app, "POST", "/empresas", Some(company)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        "POST",
        "/empresas/login",
        Some(json!({ "email": "contato@silva.com.br", "senha": "errada123" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["erro"], "Email ou senha inválidos");

    let (status, body) = send(
        &app,
        "POST",
        "/empresas/login",
        Some(json!({ "email": "nobody@silva.com.br", "senha": "segredo123" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["erro"], "Email ou senha inválidos");

    let (status, body) = send(
        &app,
        "POST",
        "/empresas/login",
        Some(json!({ "email": "contato@silva.com.br", "senha": "segredo123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dados"]["empresa"], "Metalúrgica Silva");

    let (_, list) = send(&app, "GET", "/empresas", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_company_short_password() {
    let app = app();
    let company = json!({
        "empresa": "Metalúrgica Silva",
        "endereco": "Rua das Flores, 100",
        "cnpj": "12345678000199",
        "email": "contato@silva.com.br",
        "senha": "curta"
    });

    let (status, body) = send(&app, "POST", "/empresas", Some(company)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["erro"], "Senha muito curta");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/epis/vencimento"].is_object());
}

#[tokio::test]
async fn test_history_survives_national_id_change() {
    let app = app();
    send(&app, "POST", "/funcionarios", Some(employee("11111111111"))).await;

    let request = json!({ "motivo": "Desgaste", "novoEpi": equipment("9", 100) });
    let (status, _) = send(
        &app,
        "POST",
        "/funcionarios/11111111111/substituicao",
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "PUT",
        "/funcionarios/11111111111",
        Some(json!({ "cpf": "22222222222" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/funcionarios/22222222222/historico", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["funcionario"], "22222222222");
    assert_eq!(body[0]["epi"]["CA"], "9");
}

#[tokio::test]
async fn test_route_names_are_not_valid_certificates() {
    let app = app();

    for ca in ["vencidas", "vencimento", "substituicao"] {
        let (status, body) = send(&app, "POST", "/epis", Some(equipment(ca, 100))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", ca);
        assert_eq!(body["erro"], format!("Número de CA '{}' é reservado.", ca));
    }

    send(&app, "POST", "/epis", Some(equipment("50", 100))).await;
    let (status, _) = send(&app, "PUT", "/epis/50", Some(json!({ "CA": "vencidas" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // other static segments stay usable through the item routes
    let (status, _) = send(&app, "POST", "/epis", Some(equipment("buscar", 100))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, "DELETE", "/epis/buscar", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_expiring_window_reads_leading_digits() {
    let app = app();
    send(&app, "POST", "/epis", Some(equipment("10", 10))).await;
    send(&app, "POST", "/epis", Some(equipment("25", 25))).await;

    let (status, body) = send(&app, "GET", "/epis/vencimento?diasLimite=15dias", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["mensagem"],
        "Epi com validade do CA vencendo nos próximos 15 dias."
    );
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "GET", "/epis/vencimento?diasLimite=30.9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}
