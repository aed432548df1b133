use crate::{
    audio::SoundCue,
    game::{Direction, Position},
    state::SharedView,
};

/// Nudge the marker towards `direction` and schedule its reset to rest.
///
/// Resets are never cancelled: a reset scheduled by an earlier press can snap
/// back the marker moved by a later press inside the same window.
pub async fn displace(view: &SharedView, direction: Direction) -> Position {
    let marker = view.board().write().await.displace_marker(direction);

    let reset_view = view.clone();
    view.tasks()
        .spawn_after(view.timings().marker_reset, async move {
            reset_view.board().write().await.reset_marker();
        });

    marker
}

/// Fire-and-forget sound cue.
pub fn play(view: &SharedView, cue: SoundCue) {
    view.collaborators().audio.play(cue);
}
