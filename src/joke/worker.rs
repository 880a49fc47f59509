use std::sync::mpsc;

use tokio::runtime::Handle;

use crate::joke::JokeClient;
use crate::ui::events::AppEvent;

const FETCH_COMMAND_BUFFER: usize = 16;

/// Requests sent from the UI thread to the fetch worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchCommand {
    FetchRandom,
}

pub type FetchCommandSender = tokio::sync::mpsc::Sender<FetchCommand>;

/// Start the fetch worker on `runtime`.
///
/// Every command spawns its own request; requests are never cancelled or
/// deduplicated, so results are posted to `events` in completion order.
pub fn spawn_fetch_worker(
    runtime: &Handle,
    client: JokeClient,
    events: mpsc::Sender<AppEvent>,
) -> FetchCommandSender {
    let (tx, mut rx) = tokio::sync::mpsc::channel(FETCH_COMMAND_BUFFER);

    runtime.spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                FetchCommand::FetchRandom => {
                    let client = client.clone();
                    let events = events.clone();
                    tokio::spawn(async move {
                        let result = client.fetch_random().await;
                        if let Err(err) = &result {
                            tracing::error!(error = %err, url = client.url(), "error fetching joke");
                        }
                        let _ = events.send(AppEvent::JokeFetched(result));
                    });
                }
            }
        }
        tracing::debug!("fetch worker stopped");
    });

    tx
}
