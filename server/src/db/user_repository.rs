use shared::session::CurrentUser;
use sqlx::{FromRow, SqlitePool};

pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

type Result<T> = sqlx::Result<T>;

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    is_admin: bool,
}

impl From<UserRow> for CurrentUser {
    fn from(row: UserRow) -> Self {
        CurrentUser {
            id: row.id,
            name: row.name,
            email: row.email,
            is_admin: row.is_admin,
        }
    }
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<CurrentUser>> {
        sqlx::query_as::<_, UserRow>("SELECT id, name, email, is_admin FROM app_user WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map(|row| row.map(CurrentUser::from))
    }

    /// oldest admin, i.e. the workspace creator unless it was demoted
    pub async fn get_first_admin(&self) -> Result<Option<CurrentUser>> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, is_admin FROM app_user WHERE is_admin = 1 ORDER BY id LIMIT 1",
        )
        .fetch_optional(self.pool)
        .await
        .map(|row| row.map(CurrentUser::from))
    }
}
