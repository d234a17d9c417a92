//! DynamoDB film repository implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use filmfuse_core::film::FusedFilm;
use filmfuse_core::storage::{FilmRepository, Result};

use super::conversions::{film_to_item, item_to_film};
use super::error::{map_get_item_error, map_put_item_error};

/// DynamoDB-backed repository for fused film records.
///
/// Items are keyed by the numeric catalog id. Writes are unconditional
/// puts: concurrent aggregation of the same id writes identical content,
/// so last-write-wins is safe.
pub struct DynamoDbFilmRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbFilmRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl FilmRepository for DynamoDbFilmRepository {
    async fn get_film(&self, id: u32) -> Result<Option<FusedFilm>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::N(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_film(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_film(&self, film: &FusedFilm) -> Result<()> {
        let item = film_to_item(film);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}
