#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use futures::future::{self, BoxFuture};
use tokio::{sync::Notify, time::Instant};

use window_wipe::{
    audio::{AudioSink, SoundCue},
    config::Timings,
    dao::{
        models::{ProfileEntity, ScoreUpdateEntity},
        score_store::ScoreStore,
        session::{MemorySessionStore, Session},
        storage::{StorageError, StorageResult},
    },
    game::{CueSequencer, Direction},
    services::lifecycle_service,
    state::{Collaborators, SharedView},
};

/// How the fake store answers one update.
pub enum Reply {
    Accept,
    Reject(u16),
    Hang,
    Gate(Arc<Notify>),
}

/// Score store recording every call and answering from a script (accepting once it runs dry).
#[derive(Default)]
pub struct FakeScoreStore {
    calls: Mutex<Vec<(String, ScoreUpdateEntity)>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl FakeScoreStore {
    pub fn scripted(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            calls: Mutex::default(),
            replies: Mutex::new(replies.into_iter().collect()),
        }
    }

    pub fn calls(&self) -> Vec<(String, ScoreUpdateEntity)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ScoreStore for FakeScoreStore {
    fn update_score(
        &self,
        credential: String,
        update: ScoreUpdateEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        self.calls.lock().unwrap().push((credential, update));
        let reply = self.replies.lock().unwrap().pop_front().unwrap_or(Reply::Accept);
        match reply {
            Reply::Accept => Box::pin(future::ready(StorageResult::Ok(()))),
            Reply::Reject(status) => Box::pin(future::ready(StorageResult::<()>::Err(
                StorageError::Rejected { status },
            ))),
            Reply::Hang => Box::pin(future::pending::<StorageResult<()>>()),
            Reply::Gate(gate) => Box::pin(async move {
                gate.notified().await;
                StorageResult::Ok(())
            }),
        }
    }
}

#[derive(Default)]
pub struct RecordingAudio {
    played: Mutex<Vec<SoundCue>>,
}

impl RecordingAudio {
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.lock().unwrap().clone()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&self, cue: SoundCue) {
        self.played.lock().unwrap().push(cue);
    }
}

pub struct Harness {
    pub view: SharedView,
    pub store: Arc<FakeScoreStore>,
    pub sessions: Arc<MemorySessionStore>,
    pub audio: Arc<RecordingAudio>,
    pub mounted_at: Instant,
}

impl Harness {
    pub async fn mount(session: Session, store: FakeScoreStore) -> Self {
        Self::mount_with(Timings::default(), session, store).await
    }

    pub async fn mount_with(timings: Timings, session: Session, store: FakeScoreStore) -> Self {
        let store = Arc::new(store);
        let sessions = Arc::new(MemorySessionStore::new(session));
        let audio = Arc::new(RecordingAudio::default());
        let collaborators = Collaborators {
            sessions: sessions.clone(),
            scores: store.clone(),
            audio: audio.clone(),
        };

        let mounted_at = Instant::now();
        let view =
            lifecycle_service::mount(timings, CueSequencer::seeded(7), collaborators)
                .await;

        Self {
            view,
            store,
            sessions,
            audio,
            mounted_at,
        }
    }

    /// Sleep until `ms` milliseconds after mount.
    pub async fn at(&self, ms: u64) {
        tokio::time::sleep_until(self.mounted_at + Duration::from_millis(ms)).await;
    }

    pub async fn cue(&self) -> Direction {
        self.view
            .board()
            .read()
            .await
            .active_cue()
            .expect("a cue is always active after mount")
    }

    pub async fn wrong_direction(&self) -> Direction {
        let cue = self.cue().await;
        Direction::ALL
            .into_iter()
            .find(|direction| *direction != cue)
            .unwrap()
    }
}

pub fn logged_in(points: u64, attempts: u64) -> Session {
    Session::new(
        "bearer-token",
        ProfileEntity {
            id: Some("player-1".into()),
            points,
            attempts,
            ..Default::default()
        },
    )
}
