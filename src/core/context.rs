use std::sync::Arc;

use sqlx::PgPool;

use crate::core::config::Config;
use crate::features::captains::{CaptainRepository, CaptainService, PgCaptainRepository};
use crate::features::users::{PgUserRepository, UserRepository, UserService};

/// Everything request handlers need, built once in `main` and handed to the
/// router. Cloning is cheap; all members are shared.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub captain_service: Arc<CaptainService>,
    pub user_service: Arc<UserService>,
}

impl AppContext {
    /// Wire services to PostgreSQL-backed repositories sharing one pool
    pub fn new(config: Config, pool: PgPool) -> Self {
        Self::with_repositories(
            config,
            Arc::new(PgCaptainRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
        )
    }

    pub fn with_repositories(
        config: Config,
        captains: Arc<dyn CaptainRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            captain_service: Arc::new(CaptainService::new(captains)),
            user_service: Arc::new(UserService::new(users)),
        }
    }
}
