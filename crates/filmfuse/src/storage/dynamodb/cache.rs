//! DynamoDB-backed upstream cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use filmfuse_core::cache::{CacheEntry, Clock, Result, UpstreamCache};

use super::conversions::{entry_to_item, item_to_entry};
use super::error::{map_cache_get_error, map_cache_put_error, map_cache_scan_error};

/// Upstream cache on a DynamoDB table keyed by request URL.
///
/// The table's own TTL mechanism physically deletes expired items
/// eventually; freshness is still checked on every read because that
/// deletion lags the deadline.
pub struct DynamoDbCache {
    client: Client,
    table_name: String,
    clock: Arc<dyn Clock>,
}

impl DynamoDbCache {
    /// Creates a new cache with the given DynamoDB client, table name
    /// and clock.
    pub fn new(client: Client, table_name: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            clock,
        }
    }
}

#[async_trait]
impl UpstreamCache for DynamoDbCache {
    async fn get(&self, url: &str) -> Result<Option<String>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("url", AttributeValue::S(url.to_string()))
            .send()
            .await
            .map_err(map_cache_get_error)?;

        let Some(item) = result.item else {
            return Ok(None);
        };

        let entry = item_to_entry(&item)?;
        if entry.is_fresh(self.clock.now_unix()) {
            Ok(Some(entry.body))
        } else {
            Ok(None)
        }
    }

    async fn put(&self, url: &str, body: &str, ttl: Duration) -> Result<()> {
        let entry = CacheEntry::new(url, body, ttl, self.clock.now_unix());

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(entry_to_item(&entry)))
            .send()
            .await
            .map_err(map_cache_put_error)?;

        Ok(())
    }

    async fn live_entries(&self) -> Result<Vec<CacheEntry>> {
        let now = self.clock.now_unix();

        let mut entries = Vec::new();
        let mut exclusive_start_key = None;

        // Pages are followed while a continuation key is present, so the
        // batch is complete before it is returned.
        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression("expires_at > :now")
                .expression_attribute_values(":now", AttributeValue::N(now.to_string()))
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(map_cache_scan_error)?;

            for item in result.items.unwrap_or_default() {
                entries.push(item_to_entry(&item)?);
            }

            exclusive_start_key = result.last_evaluated_key;
            if exclusive_start_key.is_none() {
                break;
            }
        }

        Ok(entries)
    }
}
