//! Storage factory for runtime backend selection

use std::sync::Arc;

use crate::config::StorageSettings;
use crate::domain::post::PostRepository;
use crate::domain::DomainError;

use super::in_memory::InMemoryPostRepository;
use super::postgres::{PostgresConfig, PostgresPostRepository};

/// Table holding posts in PostgreSQL
pub const POSTS_TABLE: &str = "posts";

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl std::str::FromStr for StorageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(DomainError::configuration(format!(
                "Unknown storage backend: {}. Valid backends: memory, postgres",
                s
            ))),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates a PostgreSQL configuration from a URL
    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

impl TryFrom<&StorageSettings> for StorageConfig {
    type Error = DomainError;

    fn try_from(settings: &StorageSettings) -> Result<Self, Self::Error> {
        match settings.backend.parse::<StorageType>()? {
            StorageType::InMemory => Ok(Self::InMemory),
            StorageType::Postgres => {
                let url = settings.database_url.clone().ok_or_else(|| {
                    DomainError::configuration("database_url is required for postgres storage")
                })?;

                Ok(Self::Postgres(
                    PostgresConfig::new(url).with_max_connections(settings.max_connections),
                ))
            }
        }
    }
}

/// Factory for creating post repositories
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a repository based on the configuration, ensuring its schema
    pub async fn create(config: &StorageConfig) -> Result<Arc<dyn PostRepository>, DomainError> {
        match config {
            StorageConfig::InMemory => Ok(Arc::new(InMemoryPostRepository::new())),
            StorageConfig::Postgres(pg_config) => {
                let repository = PostgresPostRepository::connect(pg_config, POSTS_TABLE).await?;
                repository.ensure_table().await?;
                Ok(Arc::new(repository))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::NewPost;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!("memory".parse::<StorageType>().unwrap(), StorageType::InMemory);
        assert_eq!("in-memory".parse::<StorageType>().unwrap(), StorageType::InMemory);
        assert_eq!("postgres".parse::<StorageType>().unwrap(), StorageType::Postgres);
        assert_eq!("PG".parse::<StorageType>().unwrap(), StorageType::Postgres);
        assert!(matches!(
            "sqlite".parse::<StorageType>(),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_storage_config_from_settings() {
        let memory = StorageConfig::try_from(&StorageSettings::default()).unwrap();
        assert_eq!(memory.storage_type(), StorageType::InMemory);

        let settings = StorageSettings {
            backend: "postgres".to_string(),
            database_url: Some("postgres://localhost/test".to_string()),
            max_connections: 4,
        };

        match StorageConfig::try_from(&settings).unwrap() {
            StorageConfig::Postgres(pg) => {
                assert_eq!(pg.url, "postgres://localhost/test");
                assert_eq!(pg.max_connections, 4);
            }
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn test_postgres_requires_url() {
        let settings = StorageSettings {
            backend: "postgres".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            StorageConfig::try_from(&settings),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_postgres_url_config() {
        let config = StorageConfig::postgres_url("postgres://localhost/test");
        assert_eq!(config.storage_type(), StorageType::Postgres);
    }

    #[tokio::test]
    async fn test_create_in_memory() {
        let repository = StorageFactory::create(&StorageConfig::InMemory).await.unwrap();

        let post = repository
            .insert(NewPost::new("Hello", "World", "Ada"))
            .await
            .unwrap();

        assert_eq!(post.id, 1);
        repository.ping().await.unwrap();
    }
}
