//! Shared test harness: config builder, mock backend, and test server

pub mod config;
pub mod mock_backend;
pub mod server;
