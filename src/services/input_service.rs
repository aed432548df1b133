use tracing::debug;

use crate::{
    audio::SoundCue,
    dto::events::GameEvent,
    game::{ClassifiedPress, Direction, Verdict},
    services::{cue_service, feedback_service},
    state::SharedView,
};

/// Single entry point for key-down events.
///
/// Keys other than the four arrows are ignored and yield `None` without
/// touching any state. The active cue is read at call time, so the handler
/// never judges against a stale cue.
pub async fn handle_key(view: &SharedView, key: &str) -> Option<ClassifiedPress> {
    let direction = Direction::from_key(key)?;
    if view.is_closed() {
        return None;
    }
    Some(handle_direction(view, direction).await)
}

/// Judge a recognised press and run its side effects.
pub async fn handle_direction(view: &SharedView, direction: Direction) -> ClassifiedPress {
    let press = view.board().write().await.classify(direction);

    match press.verdict {
        Verdict::Correct => {
            feedback_service::displace(view, direction).await;
            feedback_service::play(view, SoundCue::Hit);
            let score = {
                let mut score = view.score().write().await;
                score.record_hit();
                score.counts()
            };
            debug!(?direction, points = score.points, attempts = score.attempts, "hit");
            view.publish(GameEvent::Hit { press, score });

            let cue_view = view.clone();
            view.tasks()
                .spawn_after(view.timings().next_cue_delay, async move {
                    cue_service::install_next_cue(&cue_view).await;
                });
        }
        Verdict::Incorrect => {
            feedback_service::play(view, SoundCue::Miss);
            feedback_service::displace(view, direction).await;
            let score = {
                let mut score = view.score().write().await;
                score.record_miss();
                score.counts()
            };
            debug!(
                ?direction,
                expected = ?press.expected,
                attempts = score.attempts,
                "miss"
            );
            view.publish(GameEvent::Miss { press, score });
        }
    }

    press
}
