mod dashboard_repository;
mod organization_repository;
mod user_repository;

pub use dashboard_repository::DashboardRepository;
pub use organization_repository::OrganizationRepository;
pub use user_repository::UserRepository;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct ServerDatabase {
    pool: SqlitePool,
}

impl ServerDatabase {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn organization(&self) -> OrganizationRepository<'_> {
        OrganizationRepository::new(&self.pool)
    }

    pub fn dashboard(&self) -> DashboardRepository<'_> {
        DashboardRepository::new(&self.pool)
    }

    pub fn user(&self) -> UserRepository<'_> {
        UserRepository::new(&self.pool)
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
pub(crate) async fn setup_test_db() -> ServerDatabase {
    use sqlx::sqlite::SqlitePoolOptions;

    // one connection, every connection of an in-memory sqlite is its own database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    ServerDatabase::new(pool)
}
