use tracing::debug;

use crate::{dto::events::GameEvent, game::Direction, state::SharedView};

/// Draw a new cue, install it and start the spot relocation blink.
///
/// The spot is hidden immediately and shown at its new place after the settle
/// delay. Scoring never waits for the blink.
pub async fn install_next_cue(view: &SharedView) -> Direction {
    let cue = view.cues().lock().await.next_cue();
    view.board().write().await.install_cue(cue);
    debug!(?cue, "cue installed");
    view.publish(GameEvent::CueChanged { cue });

    let settle_view = view.clone();
    view.tasks()
        .spawn_after(view.timings().spot_settle, async move {
            settle_view.board().write().await.settle_spot();
        });

    cue
}
