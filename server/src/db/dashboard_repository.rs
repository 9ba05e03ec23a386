use chrono::{DateTime, Utc};
use shared::dashboard::{Dashboard, slugify};
use sqlx::{FromRow, SqlitePool};

pub struct DashboardRepository<'a> {
    pool: &'a SqlitePool,
}

type Result<T> = sqlx::Result<T>;

#[derive(FromRow)]
struct DashboardRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl From<DashboardRow> for Dashboard {
    fn from(row: DashboardRow) -> Self {
        Dashboard {
            id: row.id,
            name: row.name,
            slug: row.slug,
            created_at: row.created_at,
        }
    }
}

impl<'a> DashboardRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all_dashboards(&self) -> Result<Vec<Dashboard>> {
        sqlx::query_as::<_, DashboardRow>(
            "SELECT id, name, slug, created_at FROM dashboard ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map(|rows| rows.into_iter().map(Dashboard::from).collect())
    }

    pub async fn get_dashboard(&self, id: i64) -> Result<Option<Dashboard>> {
        sqlx::query_as::<_, DashboardRow>(
            "SELECT id, name, slug, created_at FROM dashboard WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map(|row| row.map(Dashboard::from))
    }

    /// Expects an already validated name. Slugs are unique, clashes get a numeric suffix.
    pub async fn insert_dashboard(&self, name: &str) -> Result<Dashboard> {
        let base = match slugify(name) {
            slug if slug.is_empty() => "dashboard".to_string(),
            slug => slug,
        };
        let mut slug = base.clone();
        let mut suffix = 1;
        while self.slug_exists(&slug).await? {
            suffix += 1;
            slug = format!("{base}-{suffix}");
        }

        sqlx::query_as::<_, DashboardRow>(
            "INSERT INTO dashboard (name, slug, created_at) VALUES (?, ?, ?)
             RETURNING id, name, slug, created_at",
        )
        .bind(name)
        .bind(slug)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map(Dashboard::from)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        sqlx::query_scalar::<_, i64>("SELECT count(1) FROM dashboard WHERE slug = ?")
            .bind(slug)
            .fetch_one(self.pool)
            .await
            .map(|count| count > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::setup_test_db;

    #[tokio::test]
    async fn test_insert_and_get_dashboard() {
        let db = setup_test_db().await;
        let repo = db.dashboard();

        let created = repo.insert_dashboard("Sales KPIs").await.unwrap();

        assert_eq!(created.name, "Sales KPIs");
        assert_eq!(created.slug, "sales-kpis");
        assert_eq!(repo.get_dashboard(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(repo.get_all_dashboards().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_suffix_clashing_slugs() {
        let db = setup_test_db().await;
        let repo = db.dashboard();

        repo.insert_dashboard("Ops").await.unwrap();
        let second = repo.insert_dashboard("ops").await.unwrap();
        let third = repo.insert_dashboard("OPS!").await.unwrap();
        let unnamed = repo.insert_dashboard("???").await.unwrap();

        assert_eq!(second.slug, "ops-2");
        assert_eq!(third.slug, "ops-3");
        assert_eq!(unnamed.slug, "dashboard");
    }

    #[tokio::test]
    async fn test_get_missing_dashboard() {
        let db = setup_test_db().await;

        assert_eq!(db.dashboard().get_dashboard(1).await.unwrap(), None);
    }
}
