use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use ticket_booking_core::contract::{
    TicketRecord, ATTR_EVENT_NAME, ATTR_FIRST_NAME, ATTR_NATIONALITY, ATTR_TICKET_COUNT,
    ATTR_TICKET_ID,
};

use crate::adapters::record_store::{RecordStore, ScanCursor, StoreError, TicketCountPage};

pub type Item = HashMap<String, AttributeValue>;

const TICKET_COUNT_PLACEHOLDER: &str = "#tc";

/// Ticket table keyed by `ticket_id`. The client is shared for the process lifetime.
#[derive(Debug, Clone)]
pub struct DynamoDbRecordStore {
    table_name: String,
    client: aws_sdk_dynamodb::Client,
}

impl DynamoDbRecordStore {
    pub fn new(table_name: impl Into<String>, client: aws_sdk_dynamodb::Client) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl RecordStore for DynamoDbRecordStore {
    fn put_ticket(&self, record: &TicketRecord) -> Result<(), StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let item = ticket_item(record);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| StoreError::Write(DisplayErrorContext(&error).to_string()))
            })
        })
    }

    fn scan_ticket_counts(
        &self,
        cursor: Option<&ScanCursor>,
    ) -> Result<TicketCountPage, StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let exclusive_start_key = cursor.map(cursor_to_key);

        let output = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .scan()
                    .table_name(table_name)
                    .projection_expression(TICKET_COUNT_PLACEHOLDER)
                    .expression_attribute_names(TICKET_COUNT_PLACEHOLDER, ATTR_TICKET_COUNT)
                    .set_exclusive_start_key(exclusive_start_key)
                    .send()
                    .await
                    .map_err(|error| StoreError::Scan(DisplayErrorContext(&error).to_string()))
            })
        })?;

        let counts = decode_ticket_counts(output.items())?;
        let next = output
            .last_evaluated_key()
            .filter(|key| !key.is_empty())
            .map(key_to_cursor)
            .transpose()?;

        Ok(TicketCountPage { counts, next })
    }
}

pub fn ticket_item(record: &TicketRecord) -> Item {
    let mut item = HashMap::from([
        (
            ATTR_TICKET_ID.to_string(),
            AttributeValue::S(record.ticket_id.clone()),
        ),
        (
            ATTR_EVENT_NAME.to_string(),
            AttributeValue::S(record.event_name.clone()),
        ),
        (
            ATTR_FIRST_NAME.to_string(),
            AttributeValue::S(record.first_name.clone()),
        ),
        (
            ATTR_TICKET_COUNT.to_string(),
            AttributeValue::N(record.ticket_count.to_string()),
        ),
    ]);
    if let Some(nationality) = &record.nationality {
        item.insert(
            ATTR_NATIONALITY.to_string(),
            AttributeValue::S(nationality.clone()),
        );
    }
    item
}

pub fn decode_ticket_counts(items: &[Item]) -> Result<Vec<i64>, StoreError> {
    items
        .iter()
        .map(|item| {
            let raw = item
                .get(ATTR_TICKET_COUNT)
                .and_then(|value| value.as_n().ok())
                .ok_or_else(|| {
                    StoreError::Decode(format!("{ATTR_TICKET_COUNT} is missing or not numeric"))
                })?;
            raw.parse::<i64>().map_err(|_| {
                StoreError::Decode(format!("{ATTR_TICKET_COUNT} '{raw}' is not an integer"))
            })
        })
        .collect()
}

fn cursor_to_key(cursor: &ScanCursor) -> Item {
    cursor
        .key
        .iter()
        .map(|(name, value)| (name.clone(), AttributeValue::S(value.clone())))
        .collect()
}

fn key_to_cursor(key: &Item) -> Result<ScanCursor, StoreError> {
    let mut cursor = BTreeMap::new();
    for (name, value) in key {
        let text = value.as_s().map_err(|_| {
            StoreError::Decode(format!("continuation key attribute '{name}' is not a string"))
        })?;
        cursor.insert(name.clone(), text.clone());
    }
    Ok(ScanCursor { key: cursor })
}
