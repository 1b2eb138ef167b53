use crate::filter::MetricFilter;

use async_trait::async_trait;

/// One metric as returned by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub namespace: String,
    pub metric_name: String,
    pub dimensions: Vec<(String, String)>,
}

/// Single response page
#[derive(Debug, Clone, Default)]
pub struct PageResult {
    pub metrics: Vec<MetricDescriptor>,
    pub continuation_token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Api(#[from] aws_sdk_cloudwatch::Error),

    /// Request was not delivered or timed out
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Generic trait for a paged metrics catalog
#[async_trait]
pub trait MetricLister {
    async fn fetch_page(
        &mut self,
        filter: &MetricFilter,
        continuation_token: Option<&str>,
    ) -> Result<PageResult, FetchError>;
}
