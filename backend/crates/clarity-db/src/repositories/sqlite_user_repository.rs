use crate::repositories::timestamps::{from_millis, to_millis, truncate_to_millis};
use crate::{DbError, Result as DbErrorResult};

use clarity_core::{NewUser, RepositoryError, User, UserId, UserRepository};

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

const SELECT_USER: &str = r#"
    SELECT id, email, password_digest, first_name, last_name, created_at, updated_at
    FROM users
"#;

#[derive(FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_digest: String,
    first_name: String,
    last_name: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: UserId(row.id),
            email: row.email,
            password_digest: row.password_digest,
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: from_millis("users.created_at", row.created_at)?,
            updated_at: from_millis("users.updated_at", row.updated_at)?,
        })
    }
}

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert_user(&self, user: &NewUser) -> DbErrorResult<User> {
        let created_at = truncate_to_millis("users.created_at", user.created_at)?;
        let millis = to_millis(created_at);

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    email, password_digest, first_name, last_name, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_digest)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(millis)
        .bind(millis)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id: UserId(result.last_insert_rowid()),
            email: user.email.clone(),
            password_digest: user.password_digest.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at,
            updated_at: created_at,
        })
    }

    async fn find_one(&self, filter: &str, value: UserLookup<'_>) -> DbErrorResult<Option<User>> {
        let sql = format!("{SELECT_USER} WHERE {filter} = ?");
        let query = sqlx::query_as::<_, UserRow>(&sql);
        let query = match value {
            UserLookup::Id(id) => query.bind(id.0),
            UserLookup::Email(email) => query.bind(email),
        };

        query
            .fetch_optional(&self.pool)
            .await?
            .map(User::try_from)
            .transpose()
    }
}

enum UserLookup<'a> {
    Id(UserId),
    Email(&'a str),
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        Ok(self.insert_user(user).await?)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.find_one("id", UserLookup::Id(id)).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.find_one("email", UserLookup::Email(email)).await?)
    }
}
