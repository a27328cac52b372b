//! # API Route Configuration
//!
//! This module sets up all the HTTP routes for the API.

use actix_web::web;

use super::handlers;

/// Configure all API routes.
///
/// This function is called from main.rs to set up
/// all the endpoint routes.
///
/// ## Route Structure
///
/// ```text
/// /
/// ├── /health                  GET - Health check
/// ├── /room-types              GET/POST, /{id} GET/PUT/DELETE
/// ├── /rooms                   GET/POST, /{id} GET/PUT/DELETE
/// │   └── /available           GET - rooms free for a date range
/// ├── /guests                  GET/POST, /{id} GET/PUT/DELETE
/// ├── /bookings                GET/POST, /{id} GET/PUT/DELETE
/// └── /payments                GET/POST, /{id} GET/PUT/DELETE
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Root endpoint - API information
        .route("/", web::get().to(handlers::api_info))
        // Health check endpoint
        .route("/health", web::get().to(handlers::health_check))
        // Room type catalog
        .service(
            web::scope("/room-types")
                .route("", web::get().to(handlers::list_room_types))
                .route("", web::post().to(handlers::create_room_type))
                .route("/{id}", web::get().to(handlers::get_room_type))
                .route("/{id}", web::put().to(handlers::update_room_type))
                .route("/{id}", web::delete().to(handlers::delete_room_type)),
        )
        // Rooms; /available is literal and must precede the {id} matcher
        .service(
            web::scope("/rooms")
                .route("", web::get().to(handlers::list_rooms))
                .route("", web::post().to(handlers::create_room))
                .route("/available", web::get().to(handlers::available_rooms))
                .route("/{id}", web::get().to(handlers::get_room))
                .route("/{id}", web::put().to(handlers::update_room))
                .route("/{id}", web::delete().to(handlers::delete_room)),
        )
        // Guest directory
        .service(
            web::scope("/guests")
                .route("", web::get().to(handlers::list_guests))
                .route("", web::post().to(handlers::create_guest))
                .route("/{id}", web::get().to(handlers::get_guest))
                .route("/{id}", web::put().to(handlers::update_guest))
                .route("/{id}", web::delete().to(handlers::delete_guest)),
        )
        // Bookings (lifecycle transitions ride on PUT)
        .service(
            web::scope("/bookings")
                .route("", web::get().to(handlers::list_bookings))
                .route("", web::post().to(handlers::create_booking))
                .route("/{id}", web::get().to(handlers::get_booking))
                .route("/{id}", web::put().to(handlers::update_booking))
                .route("/{id}", web::delete().to(handlers::delete_booking)),
        )
        // Payment ledger
        .service(
            web::scope("/payments")
                .route("", web::get().to(handlers::list_payments))
                .route("", web::post().to(handlers::create_payment))
                .route("/{id}", web::get().to(handlers::get_payment))
                .route("/{id}", web::put().to(handlers::update_payment))
                .route("/{id}", web::delete().to(handlers::delete_payment)),
        );
}
