//! Game HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::games::{Game, GameWithConsole};
use crate::routes::consoles::ConsoleResponse;
use crate::services::games as game_service;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub title: String,
    #[serde(rename = "consoleId")]
    pub console_id: i64,
}

impl From<Game> for GameResponse {
    fn from(value: Game) -> Self {
        Self {
            id: value.id,
            title: value.title,
            console_id: value.console_id,
        }
    }
}

/// Listing entries inline the owning console.
#[derive(Debug, Serialize)]
pub struct GameWithConsoleResponse {
    pub id: i64,
    pub title: String,
    #[serde(rename = "consoleId")]
    pub console_id: i64,
    pub console: ConsoleResponse,
}

impl From<GameWithConsole> for GameWithConsoleResponse {
    fn from(value: GameWithConsole) -> Self {
        Self {
            id: value.game.id,
            title: value.game.title,
            console_id: value.game.console_id,
            console: ConsoleResponse::from(value.console),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub title: String,
    #[serde(rename = "consoleId")]
    pub console_id: i64,
}

/// GET /games
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let games = with_txn(&app_state, |txn| {
        Box::pin(async move { game_service::list_games(txn).await.map_err(AppError::from) })
    })
    .await?;

    let body: Vec<GameWithConsoleResponse> = games
        .into_iter()
        .map(GameWithConsoleResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /games/{game_id}
async fn get_game(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let game = with_txn(&app_state, |txn| {
        Box::pin(async move { game_service::get_game(txn, id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

/// POST /games
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    let game = with_txn(&app_state, |txn| {
        Box::pin(async move {
            game_service::create_game(txn, &payload.title, payload.console_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(GameResponse::from(game)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    );
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game)));
}
