use actix_web::web;

pub mod consoles;
pub mod games;
pub mod health;

/// Configure application routes, shared by `main.rs` and the test app
/// builder so both serve exactly the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Console routes: /consoles/**
    cfg.service(web::scope("/consoles").configure(consoles::configure_routes));

    // Game routes: /games/**
    cfg.service(web::scope("/games").configure(games::configure_routes));
}
