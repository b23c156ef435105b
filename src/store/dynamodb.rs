//! DynamoDB-backed [`OrderStore`].

use crate::model::{FieldValue, Item};
use crate::store::{OrderStore, StoreError};
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::{debug, instrument};

/// Writes items to one DynamoDB table.
///
/// The client and table name are handed in at construction; there is no
/// process-wide handle.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds the store from an already loaded SDK configuration.
    pub fn from_sdk_config(config: &aws_config::SdkConfig, table_name: impl Into<String>) -> Self {
        Self::new(Client::new(config), table_name)
    }
}

#[async_trait]
impl OrderStore for DynamoStore {
    #[instrument(skip(self, item), fields(table = %self.table_name))]
    async fn put_item(&self, item: Item) -> Result<(), StoreError> {
        debug!(?item, "put_item called");

        let mut request = self.client.put_item().table_name(&self.table_name);
        for (name, value) in item {
            request = request.item(name, to_attribute_value(value));
        }

        request
            .send()
            .await
            .map(|_| ())
            .map_err(|e| StoreError::put_failed(&self.table_name, DisplayErrorContext(&e).to_string()))
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Numbers travel as decimal text, so the exact cents survive the trip.
fn to_attribute_value(value: FieldValue) -> AttributeValue {
    match value {
        FieldValue::Text(text) => AttributeValue::S(text),
        FieldValue::Integer(n) => AttributeValue::N(n.to_string()),
        FieldValue::Decimal(d) => AttributeValue::N(d.to_string()),
    }
}
