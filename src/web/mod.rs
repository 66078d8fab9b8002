pub mod handlers;
pub mod routes;
pub mod server;

pub use server::{create_app, serve, start_server};
