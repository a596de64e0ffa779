pub mod config;
pub mod http;
pub mod humanize;
pub mod server;
pub mod types;
