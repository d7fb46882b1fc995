//! Interactive chat mode.
//!
//! Owns the API client and the status poller; the TUI owns all mutable
//! controller state. The two sides talk over mpsc channels, so the
//! interface stays responsive while requests are in flight.

use crate::config::AppConfig;
use paperrag_api::models::StartIndexRequest;
use paperrag_api::{Client, ClientConfig};
use paperrag_shared::local_store::LocalStore;
use paperrag_shared::models::status::RagStatus;
use paperrag_tui::{InputEvent, OutputEvent, run_tui};
use tokio::time::{Duration, interval};

pub async fn run_chat(config: AppConfig) -> Result<(), String> {
    let api_config: ClientConfig = config.clone().into();
    let client = Client::new(&api_config)?;
    let mut prefs = LocalStore::load_preferences();

    let (input_tx, input_rx) = tokio::sync::mpsc::channel::<InputEvent>(100);
    let (output_tx, mut output_rx) = tokio::sync::mpsc::channel::<OutputEvent>(100);
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::broadcast::channel::<()>(1);
    // Out-of-cycle poll requests, e.g. right after a failed send.
    let (poke_tx, poke_rx) = tokio::sync::mpsc::channel::<()>(8);

    // Spawn TUI task
    let tui_handle = tokio::spawn(run_tui(
        input_rx,
        output_tx.clone(),
        shutdown_tx.clone(),
        prefs.use_ai,
        !prefs.tour_completed,
    ));

    // Spawn status poller
    let poller_handle = tokio::spawn(poll_status(
        client.clone(),
        input_tx.clone(),
        poke_rx,
        shutdown_tx.subscribe(),
        Duration::from_secs(config.poll_interval_secs.max(1)),
    ));

    // Service loop: hand network work off so the channel keeps draining.
    loop {
        tokio::select! {
            Some(event) = output_rx.recv() => match event {
                OutputEvent::Ask(request) => {
                    let client = client.clone();
                    let input_tx = input_tx.clone();
                    tokio::spawn(async move {
                        match client.ask(&request).await {
                            Ok(response) => {
                                let sources = response.citations();
                                let _ = input_tx
                                    .send(InputEvent::AssistantAnswer {
                                        text: response.answer,
                                        sources,
                                        model: response.model,
                                    })
                                    .await;
                            }
                            Err(e) => {
                                let _ = input_tx.send(InputEvent::AskFailed(e)).await;
                            }
                        }
                    });
                }
                OutputEvent::CheckIndex => {
                    let client = client.clone();
                    let input_tx = input_tx.clone();
                    tokio::spawn(async move {
                        let result = client.check_index().await.map(|r| r.message);
                        let _ = input_tx.send(InputEvent::IndexCheckCompleted(result)).await;
                    });
                }
                OutputEvent::StartIndex => {
                    let client = client.clone();
                    let input_tx = input_tx.clone();
                    tokio::spawn(async move {
                        let result = client
                            .start_index(&StartIndexRequest::default())
                            .await
                            .map(|r| r.status);
                        let _ = input_tx.send(InputEvent::IndexStartCompleted(result)).await;
                    });
                }
                OutputEvent::RequestStatusCheck => {
                    let _ = poke_tx.try_send(());
                }
                OutputEvent::SetUseAi(use_ai) => {
                    prefs.use_ai = use_ai;
                    if let Err(e) = LocalStore::save_preferences(&prefs) {
                        tracing::warn!("Failed to persist preferences: {}", e);
                    }
                }
                OutputEvent::MarkTourCompleted => {
                    prefs.tour_completed = true;
                    if let Err(e) = LocalStore::save_preferences(&prefs) {
                        tracing::warn!("Failed to persist preferences: {}", e);
                    }
                }
            },
            _ = shutdown_rx.recv() => break,
        }
    }

    let _ = poller_handle.await;
    tui_handle
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

/// Poll the status endpoint on a fixed interval, at startup, and whenever
/// poked. Each request runs detached and carries a sequence number so the
/// controller can drop results that resolve out of order.
async fn poll_status(
    client: Client,
    input_tx: tokio::sync::mpsc::Sender<InputEvent>,
    mut poke_rx: tokio::sync::mpsc::Receiver<()>,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
    period: Duration,
) {
    let mut seq: u64 = 0;
    // The first tick fires immediately: that is the startup poll.
    let mut ticker = interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            Some(_) = poke_rx.recv() => {}
            _ = shutdown_rx.recv() => break,
        }
        seq += 1;
        let client = client.clone();
        let input_tx = input_tx.clone();
        tokio::spawn(async move {
            let status = client.rag_status().await.ok().map(RagStatus::from);
            let _ = input_tx.send(InputEvent::StatusUpdate { seq, status }).await;
        });
    }
}
