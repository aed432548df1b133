//! Headless window-wipe driver: one key per stdin line, JSON snapshots and events on stdout.

use std::{
    io::{Write, stderr},
    sync::Arc,
};

use anyhow::Context;
use serde::Serialize;
use tokio::{
    io::{AsyncBufReadExt, BufReader, stdin},
    sync::broadcast::error::RecvError,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use window_wipe::{
    audio::{AudioSink, SoundCue},
    config::AppConfig,
    dao::{
        score_store::http::{HttpScoreStore, HttpStoreConfig},
        session::FileSessionStore,
    },
    game::CueSequencer,
    services::{input_service, lifecycle_service},
    state::{Collaborators, SharedView},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let scores = HttpScoreStore::new(HttpStoreConfig::new(config.api_base_url()))
        .context("building score API client")?;
    let collaborators = Collaborators {
        sessions: Arc::new(FileSessionStore::new(config.session_path())),
        scores: Arc::new(scores),
        audio: Arc::new(TerminalAudio),
    };

    let view =
        lifecycle_service::mount(config.timings(), CueSequencer::from_os_rng(), collaborators)
            .await;
    let mut events = view.subscribe();
    print_snapshot(&view).await?;

    let mut lines = BufReader::new(stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    info!("stdin closed");
                    break;
                };
                let key = key_name(line.trim());
                match input_service::handle_key(&view, key).await {
                    Some(press) => debug!(?press, "press handled"),
                    None => debug!(key, "ignored key"),
                }
                print_snapshot(&view).await?;
            }
            event = events.recv() => match event {
                Ok(event) => print_json(&event)?,
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "event subscriber lagged"),
                Err(RecvError::Closed) => break,
            },
            _ = &mut shutdown => break,
        }
    }

    lifecycle_service::teardown(&view);
    Ok(())
}

/// Terminal-friendly aliases for the arrow key names.
fn key_name(input: &str) -> &str {
    match input.to_ascii_lowercase().as_str() {
        "up" | "w" | "k" => "ArrowUp",
        "down" | "s" | "j" => "ArrowDown",
        "left" | "a" | "h" => "ArrowLeft",
        "right" | "d" | "l" => "ArrowRight",
        _ => input,
    }
}

async fn print_snapshot(view: &SharedView) -> anyhow::Result<()> {
    print_json(&view.snapshot().await)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let line = serde_json::to_string(value).context("encoding output")?;
    println!("{line}");
    Ok(())
}

/// Logs every cue and rings the terminal bell on a miss.
struct TerminalAudio;

impl AudioSink for TerminalAudio {
    fn play(&self, cue: SoundCue) {
        debug!(?cue, "sound cue");
        if cue == SoundCue::Miss {
            let mut err = stderr();
            let _ = err.write_all(b"\x07");
            let _ = err.flush();
        }
    }
}

/// Configure tracing so logs go to stderr and stdout stays machine-readable.
fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stderr))
        .init();
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_arrow_keys() {
        assert_eq!(key_name("w"), "ArrowUp");
        assert_eq!(key_name("DOWN"), "ArrowDown");
        assert_eq!(key_name("h"), "ArrowLeft");
        assert_eq!(key_name("ArrowRight"), "ArrowRight");
        assert_eq!(key_name("q"), "q");
    }
}
