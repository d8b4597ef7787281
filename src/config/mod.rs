//! Application configuration

mod app_config;

pub use app_config::{AppConfig, AuditConfig, CorsConfig, LogFormat, LoggingConfig, ServerConfig};
