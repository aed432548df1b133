//! Shared state of a mounted game view.

mod events;
/// Timer tasks owned by a view.
pub mod tasks;

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock, broadcast};

use crate::{
    audio::AudioSink,
    config::Timings,
    dao::{
        score_store::ScoreStore,
        session::{Session, SessionStore},
    },
    dto::{events::GameEvent, snapshot::ViewSnapshot},
    game::{Board, CueSequencer, ScoreBoard},
    sync::{StatusBoard, SyncPhase},
};

pub use self::events::EventHub;
use self::tasks::TaskScope;

/// Cheaply clonable handle to a mounted view.
pub type SharedView = Arc<GameView>;

const EVENT_CAPACITY: usize = 64;

/// External collaborators injected into a game view.
#[derive(Clone)]
pub struct Collaborators {
    /// Session cache read at mount and refreshed after each acknowledged sync.
    pub sessions: Arc<dyn SessionStore>,
    /// Remote authority receiving score updates.
    pub scores: Arc<dyn ScoreStore>,
    /// Hit/miss sound output.
    pub audio: Arc<dyn AudioSink>,
}

/// State of one mounted game view: board, score buffer, sync status and its timers.
pub struct GameView {
    timings: Timings,
    board: RwLock<Board>,
    score: RwLock<ScoreBoard>,
    status: Mutex<StatusBoard>,
    cues: Mutex<CueSequencer>,
    session: RwLock<Session>,
    collaborators: Collaborators,
    events: EventHub,
    tasks: TaskScope,
}

impl GameView {
    /// Construct a view wrapped in an [`Arc`], seeding the score from `session`.
    ///
    /// Nothing is scheduled yet; see [`crate::services::lifecycle_service::mount`].
    pub fn new(
        timings: Timings,
        session: Session,
        cues: CueSequencer,
        collaborators: Collaborators,
    ) -> SharedView {
        let score = ScoreBoard::seeded(session.cached_counts());
        Arc::new(Self {
            timings,
            board: RwLock::new(Board::new()),
            score: RwLock::new(score),
            status: Mutex::new(StatusBoard::default()),
            cues: Mutex::new(cues),
            session: RwLock::new(session),
            collaborators,
            events: EventHub::new(EVENT_CAPACITY),
            tasks: TaskScope::new(),
        })
    }

    /// Configured delays.
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Cue, marker and spot.
    pub fn board(&self) -> &RwLock<Board> {
        &self.board
    }

    /// Points, attempts, acknowledged counts and the sync lock.
    pub fn score(&self) -> &RwLock<ScoreBoard> {
        &self.score
    }

    /// Status message lifecycle.
    pub fn status(&self) -> &Mutex<StatusBoard> {
        &self.status
    }

    /// Random cue source.
    pub fn cues(&self) -> &Mutex<CueSequencer> {
        &self.cues
    }

    /// Session captured at mount, refreshed after each acknowledged sync.
    pub fn session(&self) -> &RwLock<Session> {
        &self.session
    }

    /// Injected collaborators.
    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Timer callbacks owned by this view.
    pub fn tasks(&self) -> &TaskScope {
        &self.tasks
    }

    /// Whether the view has been torn down.
    pub fn is_closed(&self) -> bool {
        self.tasks.is_closed()
    }

    /// Subscribe to game events.
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Publish a game event to subscribers.
    pub fn publish(&self, event: GameEvent) {
        self.events.broadcast(event);
    }

    /// Current sync engine phase.
    pub async fn sync_phase(&self) -> SyncPhase {
        let in_flight = self.score.read().await.sync_in_flight();
        let message = self.status.lock().await.message();
        SyncPhase::derive(in_flight, message)
    }

    /// Everything the rendering surface needs, read in one go.
    pub async fn snapshot(&self) -> ViewSnapshot {
        let board = self.board.read().await;
        let score = self.score.read().await;
        let message = self.status.lock().await.message();
        ViewSnapshot::capture(&board, &score, message)
    }
}
