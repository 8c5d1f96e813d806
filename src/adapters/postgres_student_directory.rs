//! Postgres-backed student identity lookup.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::Student;
use crate::ports::{StoreResult, StudentDirectory};

#[derive(Clone)]
pub struct PostgresStudentDirectory {
    pool: PgPool,
}

impl PostgresStudentDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentDirectory for PostgresStudentDirectory {
    async fn find_by_nouid(&self, nouid: &str) -> StoreResult<Option<Student>> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT nouid, name, full_name FROM students WHERE nouid = $1",
        )
        .bind(nouid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StudentRow::into_domain))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StudentRow {
    nouid: String,
    name: Option<String>,
    full_name: Option<String>,
}

impl StudentRow {
    fn into_domain(self) -> Student {
        Student {
            nouid: self.nouid,
            name: self.name,
            full_name: self.full_name,
        }
    }
}
