//! Running reducer effects.
//!
//! Each effect becomes one spawned task that performs a single fetch and
//! posts the outcome as an [`AppMessage`]. Tasks never touch state.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::StatsClient;
use crate::state::Effect;

use super::messages::AppMessage;

/// Perform the fetch an effect describes and wrap the result.
pub async fn run_effect(client: &StatsClient, effect: Effect, history_days: u32) -> AppMessage {
    match effect {
        Effect::FetchSummary { token, region } => AppMessage::SummaryFetched {
            token,
            result: client.fetch_region(&region).await,
        },
        Effect::FetchCountries { token } => AppMessage::CountriesFetched {
            token,
            result: client.fetch_all_countries().await,
        },
        Effect::FetchHistory { token } => AppMessage::HistoryFetched {
            token,
            result: client.fetch_history(history_days).await,
        },
    }
}

/// Run an effect on its own task and send the result to `tx`.
pub fn spawn_effect(
    client: StatsClient,
    effect: Effect,
    history_days: u32,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let token = effect.token();
        let message = run_effect(&client, effect, history_days).await;
        if tx.send(message).is_err() {
            debug!("Dropping result {}: UI loop has exited", token);
        }
    })
}
