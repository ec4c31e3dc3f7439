//! HTTP server implementation
//!
//! A small actix-web service exposing the router: route a prompt, inspect
//! models, clear the cache and run health checks.

pub mod routes;
pub mod server;
pub mod state;


pub use server::HttpServer;
pub use state::AppState;
