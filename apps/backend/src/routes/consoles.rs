//! Console HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::consoles::Console;
use crate::services::consoles as console_service;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct ConsoleResponse {
    pub id: i64,
    pub name: String,
}

impl From<Console> for ConsoleResponse {
    fn from(value: Console) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateConsoleRequest {
    pub name: String,
}

/// GET /consoles
async fn list_consoles(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let consoles = with_txn(&app_state, |txn| {
        Box::pin(async move {
            console_service::list_consoles(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    let body: Vec<ConsoleResponse> = consoles.into_iter().map(ConsoleResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /consoles/{console_id}
async fn get_console(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let console = with_txn(&app_state, |txn| {
        Box::pin(async move {
            console_service::get_console(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ConsoleResponse::from(console)))
}

/// POST /consoles
async fn create_console(
    body: ValidatedJson<CreateConsoleRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    let console = with_txn(&app_state, |txn| {
        Box::pin(async move {
            console_service::create_console(txn, &payload.name)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(ConsoleResponse::from(console)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_consoles))
            .route(web::post().to(create_console)),
    );
    cfg.service(web::resource("/{console_id}").route(web::get().to(get_console)));
}
