//! Chat front ends for a hosted multimodal completion API
//!
//! A request builder, a single-call completion client and an output content
//! filter, shared by a terminal loop and a one-route HTTP server.

pub mod ai;
pub mod builder;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod state;
pub mod terminal;
pub mod web;

pub use error::{Error, Result};
