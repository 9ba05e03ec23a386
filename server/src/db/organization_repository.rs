use shared::organization_status::OrganizationStatus;
use sqlx::{FromRow, SqlitePool};

pub struct OrganizationRepository<'a> {
    pool: &'a SqlitePool,
}

type Result<T> = sqlx::Result<T>;

#[derive(FromRow)]
struct CounterRow {
    data_sources: i64,
    queries: i64,
    alerts: i64,
    dashboards: i64,
    users: i64,
}

impl From<CounterRow> for OrganizationStatus {
    fn from(row: CounterRow) -> Self {
        // count(1) is never negative
        OrganizationStatus {
            data_sources: row.data_sources as u64,
            queries: row.queries as u64,
            alerts: row.alerts as u64,
            dashboards: row.dashboards as u64,
            users: row.users as u64,
        }
    }
}

impl<'a> OrganizationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_status(&self) -> Result<OrganizationStatus> {
        sqlx::query_as::<_, CounterRow>(
            "SELECT
                (SELECT count(1) FROM data_source) AS data_sources,
                (SELECT count(1) FROM saved_query) AS queries,
                (SELECT count(1) FROM alert) AS alerts,
                (SELECT count(1) FROM dashboard) AS dashboards,
                (SELECT count(1) FROM app_user) AS users",
        )
        .fetch_one(self.pool)
        .await
        .map(OrganizationStatus::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::setup_test_db;

    #[tokio::test]
    async fn test_fresh_workspace_has_only_its_creator() {
        let db = setup_test_db().await;

        let status = db.organization().get_status().await.unwrap();

        assert_eq!(status.users, 1);
        assert_eq!(status.data_sources, 0);
        assert_eq!(status.queries, 0);
        assert_eq!(status.alerts, 0);
        assert_eq!(status.dashboards, 0);
    }

    #[tokio::test]
    async fn test_counts_every_table() {
        let db = setup_test_db().await;
        let pool = db.pool();

        sqlx::query("INSERT INTO data_source (name, kind) VALUES ('warehouse', 'pg'), ('logs', 'athena')")
            .execute(pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO saved_query (name, data_source_id, query_text) VALUES ('signups', 1, 'SELECT 1')")
            .execute(pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO alert (name, query_id) VALUES ('no signups', 1)")
            .execute(pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO app_user (name, email) VALUES ('Jo', 'jo@localhost')")
            .execute(pool)
            .await
            .unwrap();
        db.dashboard().insert_dashboard("KPIs").await.unwrap();

        let status = db.organization().get_status().await.unwrap();

        assert_eq!(status.data_sources, 2);
        assert_eq!(status.queries, 1);
        assert_eq!(status.alerts, 1);
        assert_eq!(status.dashboards, 1);
        assert_eq!(status.users, 2);
    }
}
