use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::warn;
use utoipa::IntoParams;

use crate::model::entity::Record;

/// Read access to persisted records.
pub trait RecordSource: Send + Sync + 'static {
    /// Every row of `T`'s table in id order.
    fn fetch_all<T: Record>(&self) -> impl Future<Output = anyhow::Result<Vec<T>>> + Send;

    /// One page of `T`, newest id first.
    fn fetch_page<T: Record>(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = anyhow::Result<Page<T>>> + Send;
}

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, starting at 1
    pub page: Option<u32>,
    /// Items per page (1-100, default 20)
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: u32 = 20;
    pub const MAX_PER_PAGE: u32 = 100;

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        PageRequest {
            page: query.page.unwrap_or(1).max(1),
            per_page: query
                .per_page
                .unwrap_or(Self::DEFAULT_PER_PAGE)
                .clamp(1, Self::MAX_PER_PAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

/// A failed fetch degrades to an empty collection for this cycle.
pub async fn fetch_or_empty<T: Record, S: RecordSource>(source: &S) -> Vec<T> {
    match source.fetch_all::<T>().await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, table = T::TABLE, "Fetch failed, continuing without records");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::visa::Visa;
    use crate::test_support::{MemorySource, date, visa};

    #[test]
    fn page_query_is_clamped() {
        let request = PageRequest::from(PageQuery {
            page: Some(0),
            per_page: Some(500),
        });
        assert_eq!(request, PageRequest { page: 1, per_page: 100 });
        assert_eq!(request.offset(), 0);

        let request = PageRequest::from(PageQuery::default());
        assert_eq!(request.per_page, PageRequest::DEFAULT_PER_PAGE);

        let request = PageRequest::from(PageQuery {
            page: Some(3),
            per_page: Some(10),
        });
        assert_eq!(request.offset(), 20);
    }

    #[actix_web::test]
    async fn failed_fetch_is_empty() {
        let source = MemorySource::default()
            .with(&[visa(1, Some(date("2024-06-20")))])
            .failing(Visa::TABLE);

        let rows: Vec<Visa> = fetch_or_empty(&source).await;
        assert!(rows.is_empty());
    }

    #[actix_web::test]
    async fn memory_pages_are_newest_first() {
        let source = MemorySource::default().with(&[
            visa(1, None),
            visa(2, None),
            visa(3, None),
        ]);

        let page: Page<Visa> = source
            .fetch_page(PageRequest { page: 1, per_page: 2 })
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        let ids: Vec<u64> = page.data.iter().map(|v| v.id).collect();
        assert_eq!(ids, [3, 2]);
    }
}
