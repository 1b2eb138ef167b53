use crate::config::CloudwatchConfig;
use crate::error::CheckError;
use crate::filter::MetricFilter;
use crate::lister::{FetchError, MetricDescriptor, MetricLister, PageResult};

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_cloudwatch::config::http::HttpResponse;
use aws_sdk_cloudwatch::error::{DisplayErrorContext, SdkError};
use aws_sdk_cloudwatch::operation::list_metrics::ListMetricsError;
use aws_sdk_cloudwatch::types::{DimensionFilter, Metric};
use aws_sdk_cloudwatch::Client;
use log::{debug, info};

/// Listing implementation backed by CloudWatch ListMetrics
pub struct CloudwatchLister {
    client: Client,
}

/// Load AWS configuration, make sure credentials resolve and create a lister
pub async fn create_cloudwatch_lister(
    config: &CloudwatchConfig,
) -> Result<CloudwatchLister, CheckError> {
    let shared_config = load_shared_config(config).await;
    check_credentials(&shared_config).await?;
    Ok(CloudwatchLister {
        client: Client::new(&shared_config),
    })
}

async fn load_shared_config(config: &CloudwatchConfig) -> SdkConfig {
    let region_provider =
        RegionProviderChain::first_try(config.region.clone().map(Region::new)).or_default_provider();
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(ref profile) = config.profile {
        loader = loader.profile_name(profile);
    }
    loader.load().await
}

async fn check_credentials(shared_config: &SdkConfig) -> Result<(), CheckError> {
    info!("Checking AWS credentials");
    let region = shared_config
        .region()
        .ok_or_else(|| CheckError::Credentials("no AWS region configured".to_string()))?;
    debug!("Using region {}", region);
    let provider = shared_config
        .credentials_provider()
        .ok_or_else(|| CheckError::Credentials("no credentials provider".to_string()))?;
    provider
        .provide_credentials()
        .await
        .map_err(|err| CheckError::Credentials(err.to_string()))?;
    Ok(())
}

fn dimension_filters(filter: &MetricFilter) -> Vec<DimensionFilter> {
    filter
        .dimension_filters
        .iter()
        .map(|(name, value)| DimensionFilter::builder().name(name).value(value).build())
        .collect()
}

/// Requests that never reached the service are transport failures
fn classify_error(err: SdkError<ListMetricsError, HttpResponse>) -> FetchError {
    if matches!(err, SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)) {
        FetchError::Transport(DisplayErrorContext(&err).to_string())
    } else {
        FetchError::Api(err.into())
    }
}

/// Missing fields become empty strings
fn to_descriptor(metric: &Metric) -> MetricDescriptor {
    MetricDescriptor {
        namespace: metric.namespace().unwrap_or_default().to_string(),
        metric_name: metric.metric_name().unwrap_or_default().to_string(),
        dimensions: metric
            .dimensions()
            .iter()
            .map(|d| {
                (
                    d.name().unwrap_or_default().to_string(),
                    d.value().unwrap_or_default().to_string(),
                )
            })
            .collect(),
    }
}

#[async_trait]
impl MetricLister for CloudwatchLister {
    async fn fetch_page(
        &mut self,
        filter: &MetricFilter,
        continuation_token: Option<&str>,
    ) -> Result<PageResult, FetchError> {
        debug!(
            "Listing CloudWatch metrics for {:?} with token {:?}",
            filter, continuation_token
        );
        let dimensions = dimension_filters(filter);
        let output = self
            .client
            .list_metrics()
            .set_namespace(filter.namespace.clone())
            .set_metric_name(filter.metric_name.clone())
            .set_dimensions((!dimensions.is_empty()).then_some(dimensions))
            .set_next_token(continuation_token.map(str::to_string))
            .send()
            .await
            .map_err(classify_error)?;

        Ok(PageResult {
            metrics: output.metrics().iter().map(to_descriptor).collect(),
            continuation_token: output.next_token().map(str::to_string),
        })
    }
}
