//! In-memory stand-ins for the database-backed repositories.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::config::{AppConfig, Config, DatabaseConfig, SwaggerConfig};
use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::captains::models::{Captain, NewCaptain};
use crate::features::captains::CaptainRepository;
use crate::features::users::models::{NewUser, User};
use crate::features::users::UserRepository;

/// Captain store that keeps records in a `Vec` and remembers every `create` call
#[derive(Default)]
pub struct InMemoryCaptainRepository {
    captains: Mutex<Vec<Captain>>,
    create_calls: Mutex<Vec<NewCaptain>>,
}

impl InMemoryCaptainRepository {
    pub fn create_calls(&self) -> Vec<NewCaptain> {
        self.create_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptainRepository for InMemoryCaptainRepository {
    async fn create(&self, captain: NewCaptain) -> Result<Captain> {
        self.create_calls.lock().unwrap().push(captain.clone());

        let now = Utc::now();
        let stored = Captain {
            id: Uuid::now_v7(),
            fullname: captain.fullname,
            email: captain.email,
            password: captain.password,
            vehicle: captain.vehicle,
            created_at: now,
            updated_at: now,
        };
        self.captains.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Captain>> {
        Ok(self
            .captains
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    create_calls: Mutex<Vec<NewUser>>,
}

impl InMemoryUserRepository {
    pub fn create_calls(&self) -> Vec<NewUser> {
        self.create_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User> {
        self.create_calls.lock().unwrap().push(user.clone());

        let now = Utc::now();
        Ok(User {
            id: Uuid::now_v7(),
            fullname: user.fullname,
            email: user.email,
            password: user.password,
            created_at: now,
            updated_at: now,
        })
    }
}

pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 64 * 1024,
        },
        database: DatabaseConfig {
            url: "postgres://localhost/unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout_secs: 1,
            idle_timeout_secs: 1,
            max_lifetime_secs: 1,
        },
        swagger: SwaggerConfig {
            username: None,
            password: None,
            title: "Test API".to_string(),
            version: "0.0.0".to_string(),
            description: "test".to_string(),
        },
    }
}

/// Application context wired to in-memory repositories
pub fn test_context(
    config: Config,
) -> (
    AppContext,
    Arc<InMemoryCaptainRepository>,
    Arc<InMemoryUserRepository>,
) {
    let captains = Arc::new(InMemoryCaptainRepository::default());
    let users = Arc::new(InMemoryUserRepository::default());
    let context = AppContext::with_repositories(config, captains.clone(), users.clone());
    (context, captains, users)
}
