use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use ticket_booking_lambda::config::AppConfig;
use ticket_booking_lambda::handlers::response::ApiGatewayResponse;
use ticket_booking_lambda::handlers::ticket_sum::handle_ticket_sum_event;
use ticket_booking_lambda::logging::init_logging;
use ticket_booking_lambda::runtime::RuntimeDependencies;

async fn handle_request(
    deps: &RuntimeDependencies,
    _event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_ticket_sum_event(&deps.store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::from_env()?;
    init_logging(&config.logging)?;
    let deps = RuntimeDependencies::load(config).await?;

    let deps = &deps;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(deps, event).await
    }))
    .await
}
