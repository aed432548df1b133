use std::{sync::Weak, time::Duration};

use tokio::time::{Instant, MissedTickBehavior, interval_at, timeout};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    dao::{models::ScoreUpdateEntity, session::Credentials},
    dto::events::GameEvent,
    error::SyncError,
    game::ScoreCounts,
    state::{GameView, SharedView},
    sync::{CycleId, StatusKind, TickOutcome},
};

/// Drive [`tick`] every `period` until the view is dropped or torn down.
///
/// The first tick fires one full period after mount. Only a weak handle is
/// held between ticks.
pub async fn run_sync_timer(view: Weak<GameView>, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let Some(view) = view.upgrade() else {
            break;
        };
        if let TickOutcome::Closed = tick(&view).await {
            break;
        }
    }
}

/// One sync timer tick.
///
/// Does nothing while a push is in flight or when the local counts equal the
/// acknowledged ones. Without a session it shows the login prompt instead of
/// calling the store. Otherwise it takes the sync lock and starts a push in the
/// background, so a burst of presses between ticks is coalesced into a single
/// update carrying the latest totals.
pub async fn tick(view: &SharedView) -> TickOutcome {
    if view.is_closed() {
        return TickOutcome::Closed;
    }

    let credentials = view.session().read().await.credentials();

    let mut score = view.score().write().await;
    if score.sync_in_flight() {
        return TickOutcome::InFlight;
    }
    let Some(counts) = score.pending() else {
        return TickOutcome::UpToDate;
    };
    let Some(credentials) = credentials else {
        drop(score);
        debug!("score changed without a session; skipping sync");
        report_status(view, SyncError::NoSession.status()).await;
        return TickOutcome::LoginRequired;
    };
    score.begin_sync();
    drop(score);

    let cycle_id = Uuid::new_v4();
    let cycle_view = view.clone();
    let spawned = view.tasks().spawn(async move {
        run_sync_cycle(&cycle_view, cycle_id, credentials, counts).await;
    });
    if !spawned {
        // Torn down between the check above and the spawn.
        view.score().write().await.finish_sync(None);
        return TickOutcome::Closed;
    }

    TickOutcome::Started(cycle_id)
}

/// Push `counts` to the store and settle the outcome.
///
/// The sync lock is released on every path, including a timeout.
async fn run_sync_cycle(
    view: &SharedView,
    cycle_id: CycleId,
    credentials: Credentials,
    counts: ScoreCounts,
) {
    debug!(
        %cycle_id,
        points = counts.points,
        attempts = counts.attempts,
        "pushing score"
    );

    let result = push_score(view, credentials, counts).await;

    if view.is_closed() {
        debug!(%cycle_id, "view torn down; ignoring sync completion");
        return;
    }

    match result {
        Ok(()) => {
            view.score().write().await.finish_sync(Some(counts));
            refresh_session_cache(view, counts).await;
            info!(
                %cycle_id,
                points = counts.points,
                attempts = counts.attempts,
                "score updated"
            );
            view.publish(GameEvent::Synced {
                acknowledged: counts,
            });
            report_status(view, StatusKind::Updated).await;
        }
        Err(err) => {
            view.score().write().await.finish_sync(None);
            warn!(%cycle_id, error = %err, "score update failed");
            report_status(view, err.status()).await;
        }
    }
}

async fn push_score(
    view: &SharedView,
    credentials: Credentials,
    counts: ScoreCounts,
) -> Result<(), SyncError> {
    let update = ScoreUpdateEntity::new(credentials.identity, counts);
    let request = view
        .collaborators()
        .scores
        .update_score(credentials.token, update);

    match timeout(view.timings().sync_timeout, request).await {
        Ok(result) => result.map_err(SyncError::from),
        Err(_) => Err(SyncError::Timeout),
    }
}

/// Merge acknowledged counts into the cached profile and write it back.
///
/// A failed write is logged; the update itself already succeeded.
async fn refresh_session_cache(view: &SharedView, counts: ScoreCounts) {
    let merged = {
        let mut session = view.session().write().await;
        *session = session.with_counts(counts);
        session.clone()
    };

    if let Err(err) = view.collaborators().sessions.persist(merged).await {
        warn!(error = %err, "failed to refresh session cache");
    }
}

/// Show `kind` and, if no message lifecycle is running, start one.
///
/// The message stays for the display window, is marked exiting for the fade
/// window, then cleared. A report arriving while a message is up replaces its
/// text and rides on the running lifecycle.
pub async fn report_status(view: &SharedView, kind: StatusKind) {
    let starts_lifecycle = view.status().lock().await.report(kind);
    view.publish(GameEvent::status(kind));

    if !starts_lifecycle {
        return;
    }

    let timings = view.timings();
    let lifecycle_view = view.clone();
    view.tasks()
        .spawn_after(timings.status_display, async move {
            lifecycle_view.status().lock().await.begin_exit();
            lifecycle_view.publish(GameEvent::StatusExiting);

            tokio::time::sleep(timings.status_fade).await;

            lifecycle_view.status().lock().await.clear();
            lifecycle_view.publish(GameEvent::StatusCleared);
        });
}
