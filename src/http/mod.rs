//! HTTP layer: server setup, routes, and request handlers.

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
