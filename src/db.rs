use anyhow::Context;
use sqlx::MySqlPool;
use tracing::debug;

use crate::model::entity::Record;
use crate::source::{Page, PageRequest, RecordSource};

pub async fn init_db(database_url: &str) -> anyhow::Result<MySqlPool> {
    MySqlPool::connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// [`RecordSource`] over the application's MySQL schema.
#[derive(Clone)]
pub struct MySqlSource {
    pool: MySqlPool,
}

impl MySqlSource {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl RecordSource for MySqlSource {
    async fn fetch_all<T: Record>(&self) -> anyhow::Result<Vec<T>> {
        let sql = format!("SELECT * FROM {} ORDER BY id", T::TABLE);
        debug!(sql = %sql, "Fetching records");

        sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch {}", T::TABLE))
    }

    async fn fetch_page<T: Record>(&self, request: PageRequest) -> anyhow::Result<Page<T>> {
        let count_sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
        debug!(sql = %count_sql, "Counting records");

        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("Failed to count {}", T::TABLE))?;

        let data_sql = format!("SELECT * FROM {} ORDER BY id DESC LIMIT ? OFFSET ?", T::TABLE);
        debug!(
            sql = %data_sql,
            page = request.page,
            per_page = request.per_page,
            "Fetching record page"
        );

        let data = sqlx::query_as::<_, T>(&data_sql)
            .bind(i64::from(request.per_page))
            .bind(request.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch {} page", T::TABLE))?;

        Ok(Page {
            data,
            page: request.page,
            per_page: request.per_page,
            total,
        })
    }
}
