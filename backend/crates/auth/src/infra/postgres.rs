//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::{AdminId, ParentId, SchoolId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Admin, Parent, SchoolCredential};
use crate::domain::repository::{AdminRepository, ParentRepository, SchoolCredentialRepository};
use crate::domain::value_object::{AccessCode, TcNo};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AdminRepository for PgAuthRepository {
    async fn find_admin_by_username(&self, username: &str) -> AuthResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, username, password, created_at
            FROM admins
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AdminRow::into_admin))
    }

    async fn list_admins(&self) -> AuthResult<Vec<Admin>> {
        let rows = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, username, password, created_at
            FROM admins
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AdminRow::into_admin).collect())
    }

    async fn count_admins(&self) -> AuthResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create_admin(&self, admin: &Admin) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admins (id, username, password, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(admin.admin_id.into_uuid())
        .bind(&admin.username)
        .bind(&admin.password)
        .bind(admin.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::UsernameTaken
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn create_first_admin(&self, admin: &Admin) -> AuthResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO admins (id, username, password, created_at)
            SELECT $1, $2, $3, $4
            WHERE NOT EXISTS (SELECT 1 FROM admins)
            "#,
        )
        .bind(admin.admin_id.into_uuid())
        .bind(&admin.username)
        .bind(&admin.password)
        .bind(admin.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            // a concurrent bootstrap won the race
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) => Err(AuthError::Database(e)),
        }
    }

    async fn delete_admin(&self, admin_id: &AdminId) -> AuthResult<bool> {
        let mut tx = self.pool.begin().await?;

        // Row locks serialize concurrent deletes; a waiting delete sees the
        // rows another one removed as gone.
        let ids: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM admins FOR UPDATE")
            .fetch_all(&mut *tx)
            .await?;

        if ids.len() <= 1 || !ids.contains(&admin_id.into_uuid()) {
            return Ok(false);
        }

        let deleted = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(admin_id.into_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(deleted == 1)
    }

    async fn update_admin_password(&self, admin_id: &AdminId, password: &str) -> AuthResult<bool> {
        let updated = sqlx::query("UPDATE admins SET password = $2 WHERE id = $1")
            .bind(admin_id.into_uuid())
            .bind(password)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated == 1)
    }
}

impl SchoolCredentialRepository for PgAuthRepository {
    async fn find_school_by_login(
        &self,
        username: &str,
        access_code: &AccessCode,
    ) -> AuthResult<Option<SchoolCredential>> {
        let row = sqlx::query_as::<_, SchoolCredentialRow>(
            r#"
            SELECT id, name, username, password, access_code
            FROM schools
            WHERE username = $1 OR access_code = $2
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(access_code.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SchoolCredentialRow::into_credential))
    }

    async fn find_school_by_access_code(
        &self,
        access_code: &AccessCode,
    ) -> AuthResult<Option<SchoolCredential>> {
        let row = sqlx::query_as::<_, SchoolCredentialRow>(
            r#"
            SELECT id, name, username, password, access_code
            FROM schools
            WHERE access_code = $1
            "#,
        )
        .bind(access_code.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SchoolCredentialRow::into_credential))
    }
}

impl ParentRepository for PgAuthRepository {
    async fn find_or_create_parent(&self, tc_no: &TcNo) -> AuthResult<Parent> {
        // The no-op update makes RETURNING yield the existing row on conflict
        let row = sqlx::query_as::<_, ParentRow>(
            r#"
            INSERT INTO parents (id, tc_no)
            VALUES ($1, $2)
            ON CONFLICT (tc_no) DO UPDATE SET tc_no = EXCLUDED.tc_no
            RETURNING id, tc_no, name, phone, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tc_no.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_parent())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct AdminRow {
    id: Uuid,
    username: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_admin(self) -> Admin {
        Admin {
            admin_id: AdminId::from_uuid(self.id),
            username: self.username,
            password: self.password,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SchoolCredentialRow {
    id: Uuid,
    name: String,
    username: String,
    password: String,
    access_code: String,
}

impl SchoolCredentialRow {
    fn into_credential(self) -> SchoolCredential {
        SchoolCredential {
            school_id: SchoolId::from_uuid(self.id),
            name: self.name,
            username: self.username,
            password: self.password,
            access_code: self.access_code,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ParentRow {
    id: Uuid,
    tc_no: String,
    name: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
}

impl ParentRow {
    fn into_parent(self) -> Parent {
        Parent {
            parent_id: ParentId::from_uuid(self.id),
            tc_no: self.tc_no,
            name: self.name,
            phone: self.phone,
            created_at: self.created_at,
        }
    }
}
