use crate::config::AwsConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

/// Resolves the shared SDK configuration: region from config, credentials from the
/// default provider chain.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    debug!("Loading AWS configuration for region {}", config.region);

    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

    if let Some(endpoint_url) = &config.endpoint_url {
        debug!("Using AWS endpoint override {}", endpoint_url);
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}
