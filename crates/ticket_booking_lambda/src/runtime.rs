//! Process-wide dependencies, built once at cold start and borrowed by every
//! invocation.

use lambda_runtime::Error;
use ticket_booking_core::ticket_id::RandomTicketIds;
use tracing::info;

use crate::adapters::dynamodb::DynamoDbRecordStore;
use crate::adapters::nationalize::NationalizeClient;
use crate::config::AppConfig;
use crate::handlers::booking::BookingHandler;

pub struct RuntimeDependencies {
    pub config: AppConfig,
    pub store: DynamoDbRecordStore,
    pub nationality: NationalizeClient,
    pub ticket_ids: RandomTicketIds,
}

impl RuntimeDependencies {
    pub async fn load(config: AppConfig) -> Result<Self, Error> {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let store = DynamoDbRecordStore::new(
            config.table_name.clone(),
            aws_sdk_dynamodb::Client::new(&aws_config),
        );
        let nationality =
            NationalizeClient::new(&config.nationalize_base_url, config.nationality_timeout)?;
        let ticket_ids = RandomTicketIds::new(config.ticket_id_length);

        info!(
            component = "runtime",
            event = "dependencies_loaded",
            table_name = %config.table_name,
            nationality_failure_policy = ?config.nationality_failure_policy,
        );

        Ok(Self {
            config,
            store,
            nationality,
            ticket_ids,
        })
    }

    pub fn booking_handler(&self) -> BookingHandler<'_> {
        BookingHandler {
            store: &self.store,
            nationality: &self.nationality,
            ticket_ids: &self.ticket_ids,
            nationality_failure_policy: self.config.nationality_failure_policy,
        }
    }
}
