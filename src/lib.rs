pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod gateway;
pub mod handlers;
mod llm_client;
pub mod models;
pub mod prompt;
pub mod service;
pub mod subjects;
