//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CacheSettings, InvalidationPolicy, LogFormat, LoggingConfig, ServerConfig,
    StorageSettings,
};
