use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    config::Timings,
    dao::session::Session,
    game::CueSequencer,
    services::{cue_service, sync_service},
    state::{Collaborators, GameView, SharedView},
};

/// Mount a game view: load the session once, seed the score, show the first
/// cue and start the periodic sync timer.
///
/// An unreadable session cache degrades to a guest session; gameplay never
/// waits on it.
pub async fn mount(
    timings: Timings,
    cues: CueSequencer,
    collaborators: Collaborators,
) -> SharedView {
    let session = match collaborators.sessions.load().await {
        Ok(session) => session,
        Err(err) => {
            warn!(error = %err, "failed to load session; playing as guest");
            Session::guest()
        }
    };
    let logged_in = session.is_logged_in();
    let seed = session.cached_counts();

    let view = GameView::new(timings, session, cues, collaborators);
    cue_service::install_next_cue(&view).await;

    let timer = sync_service::run_sync_timer(Arc::downgrade(&view), timings.sync_interval);
    view.tasks().spawn(timer);

    info!(
        logged_in,
        points = seed.points,
        attempts = seed.attempts,
        "game view mounted"
    );
    view
}

/// Tear the view down: cancel every pending timer and in-flight sync.
///
/// Completions arriving afterwards are ignored.
pub fn teardown(view: &SharedView) {
    view.tasks().close();
    info!("game view torn down");
}
