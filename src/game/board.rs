use serde::Serialize;

use super::direction::{Direction, MARKER_REST, Position, SPOT_ORIGIN};

/// Outcome of comparing a press against the active cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The press matched the active cue.
    Correct,
    /// The press did not match (or no cue was active yet).
    Incorrect,
}

/// A recognised press together with the cue it was judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifiedPress {
    /// Direction the player pressed.
    pub pressed: Direction,
    /// Cue that was active when the press arrived.
    pub expected: Option<Direction>,
    /// Whether the press matched.
    pub verdict: Verdict,
}

/// Decoration of a single on-screen control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    /// Direction the control stands for.
    pub direction: Direction,
    /// Arrow shown on the control.
    pub glyph: char,
    /// The control is the current target.
    pub current: bool,
    /// The control is the current target and the last press missed it.
    pub wrong: bool,
}

/// Visual game state: cue, marker and target spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    active_cue: Option<Direction>,
    wrong: bool,
    marker: Position,
    spot: Position,
    spot_visible: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            active_cue: None,
            wrong: false,
            marker: MARKER_REST,
            spot: SPOT_ORIGIN,
            spot_visible: true,
        }
    }
}

impl Board {
    /// Fresh board with no cue installed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction the player must press next.
    pub fn active_cue(&self) -> Option<Direction> {
        self.active_cue
    }

    /// Whether the last press missed the active cue.
    pub fn is_wrong(&self) -> bool {
        self.wrong
    }

    /// Current marker position.
    pub fn marker(&self) -> Position {
        self.marker
    }

    /// Current spot position.
    pub fn spot(&self) -> Position {
        self.spot
    }

    /// Whether the spot is shown (false while it relocates).
    pub fn spot_visible(&self) -> bool {
        self.spot_visible
    }

    /// Judge a press against the active cue and update the wrong flag.
    pub fn classify(&mut self, pressed: Direction) -> ClassifiedPress {
        let expected = self.active_cue;
        let verdict = if expected == Some(pressed) {
            self.wrong = false;
            Verdict::Correct
        } else {
            self.wrong = true;
            Verdict::Incorrect
        };

        ClassifiedPress {
            pressed,
            expected,
            verdict,
        }
    }

    /// Install a new cue and hide the spot until [`Board::settle_spot`] runs.
    pub fn install_cue(&mut self, cue: Direction) {
        self.active_cue = Some(cue);
        self.spot_visible = false;
    }

    /// Place the spot on the active cue's target zone and show it again.
    ///
    /// The position is taken from the cue active at settle time, so the spot
    /// can never reappear over a stale target.
    pub fn settle_spot(&mut self) {
        if let Some(cue) = self.active_cue {
            self.spot = cue.spot();
        }
        self.spot_visible = true;
    }

    /// Nudge the marker towards `direction`.
    pub fn displace_marker(&mut self, direction: Direction) -> Position {
        self.marker = direction.displace(self.marker);
        self.marker
    }

    /// Put the marker back at its rest position.
    pub fn reset_marker(&mut self) {
        self.marker = MARKER_REST;
    }

    /// Per-control decoration. Only the active cue's control can be `wrong`.
    pub fn controls(&self) -> [ControlState; 4] {
        Direction::ALL.map(|direction| {
            let current = self.active_cue == Some(direction);
            ControlState {
                direction,
                glyph: direction.glyph(),
                current,
                wrong: current && self.wrong,
            }
        })
    }
}
