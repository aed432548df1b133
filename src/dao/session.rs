//! Session/identity collaborator: who is playing and with which bearer token.

use std::{
    io::ErrorKind,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use futures::future::{self, BoxFuture};
use thiserror::Error;
use tokio::fs;

use crate::{
    dao::models::{ProfileEntity, SessionDocument},
    game::ScoreCounts,
};

/// Result alias for session cache operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Failures of the session cache.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The cache file exists but could not be read.
    #[error("failed to read session cache `{path}`")]
    Read {
        /// Cache file.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The cache file could not be written.
    #[error("failed to write session cache `{path}`")]
    Write {
        /// Cache file.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The cache file is not a valid session document.
    #[error("failed to decode session cache `{path}`")]
    Decode {
        /// Cache file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// The session could not be serialised.
    #[error("failed to encode session cache")]
    Encode(#[source] serde_json::Error),
}

/// Identity and bearer token, both present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Player identifier.
    pub identity: String,
    /// Bearer token attached to score updates.
    pub token: String,
}

/// Session captured when the game view mounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    document: SessionDocument,
}

impl Session {
    /// Session without a logged in player.
    pub fn guest() -> Self {
        Self::default()
    }

    /// Logged in session for `profile`.
    pub fn new(token: impl Into<String>, profile: ProfileEntity) -> Self {
        Self {
            document: SessionDocument {
                token: Some(token.into()),
                user: Some(profile),
            },
        }
    }

    /// Wrap a raw cache document.
    pub fn from_document(document: SessionDocument) -> Self {
        Self { document }
    }

    /// Raw cache document.
    pub fn document(&self) -> &SessionDocument {
        &self.document
    }

    /// Identity and token, only when both are set.
    pub fn credentials(&self) -> Option<Credentials> {
        let token = self.document.token.as_ref().filter(|t| !t.is_empty())?;
        let identity = self
            .document
            .user
            .as_ref()
            .and_then(|user| user.id.as_ref())
            .filter(|id| !id.is_empty())?;

        Some(Credentials {
            identity: identity.clone(),
            token: token.clone(),
        })
    }

    /// Whether a player is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.credentials().is_some()
    }

    /// Counts cached in the profile, zero for guests.
    pub fn cached_counts(&self) -> ScoreCounts {
        self.document
            .user
            .as_ref()
            .map(|user| ScoreCounts::new(user.points, user.attempts))
            .unwrap_or_default()
    }

    /// Copy of this session with `counts` merged into the cached profile.
    pub fn with_counts(&self, counts: ScoreCounts) -> Self {
        let mut document = self.document.clone();
        if let Some(user) = document.user.as_mut() {
            user.points = counts.points;
            user.attempts = counts.attempts;
        }
        Self { document }
    }
}

/// Where the session is read from at mount and written back after a sync.
pub trait SessionStore: Send + Sync {
    /// Read the current session. A missing cache is a guest session.
    fn load(&self) -> BoxFuture<'static, SessionResult<Session>>;
    /// Persist the merged session.
    fn persist(&self, session: Session) -> BoxFuture<'static, SessionResult<()>>;
}

/// JSON file cache holding `token` and `user`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: Arc<PathBuf>,
}

impl FileSessionStore {
    /// Cache stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> BoxFuture<'static, SessionResult<Session>> {
        let path = self.path.clone();
        Box::pin(async move {
            let contents = match fs::read_to_string(path.as_path()).await {
                Ok(contents) => contents,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Session::guest()),
                Err(source) => {
                    return Err(SessionError::Read {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            };

            serde_json::from_str::<SessionDocument>(&contents)
                .map(Session::from_document)
                .map_err(|source| SessionError::Decode {
                    path: path.to_path_buf(),
                    source,
                })
        })
    }

    fn persist(&self, session: Session) -> BoxFuture<'static, SessionResult<()>> {
        let path = self.path.clone();
        Box::pin(async move {
            let contents =
                serde_json::to_string_pretty(session.document()).map_err(SessionError::Encode)?;
            fs::write(path.as_path(), contents)
                .await
                .map_err(|source| SessionError::Write {
                    path: path.to_path_buf(),
                    source,
                })
        })
    }
}

/// Session kept in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Session>,
}

impl MemorySessionStore {
    /// Store initially holding `session`.
    pub fn new(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    /// Last persisted session.
    pub fn current(&self) -> Session {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> BoxFuture<'static, SessionResult<Session>> {
        Box::pin(future::ready(Ok(self.current())))
    }

    fn persist(&self, session: Session) -> BoxFuture<'static, SessionResult<()>> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session;
        Box::pin(future::ready(Ok(())))
    }
}

#[cfg(test)]
mod tests {
    use std::fs as std_fs;

    use serde_json::json;

    use super::*;

    fn profile(id: Option<&str>, points: u64, attempts: u64) -> ProfileEntity {
        ProfileEntity {
            id: id.map(str::to_string),
            points,
            attempts,
            ..Default::default()
        }
    }

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("window-wipe-{}", uuid::Uuid::new_v4()));
        std_fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn credentials_need_identity_and_token() {
        assert!(Session::guest().credentials().is_none());
        assert!(
            Session::new("tok", profile(None, 0, 0))
                .credentials()
                .is_none()
        );
        assert!(
            Session::new("", profile(Some("u1"), 0, 0))
                .credentials()
                .is_none()
        );

        let creds = Session::new("tok", profile(Some("u1"), 0, 0))
            .credentials()
            .unwrap();
        assert_eq!(creds.identity, "u1");
        assert_eq!(creds.token, "tok");
    }

    #[test]
    fn merged_counts_replace_cached_ones() {
        let session = Session::new("tok", profile(Some("u1"), 8, 10));
        assert_eq!(session.cached_counts(), ScoreCounts::new(8, 10));

        let merged = session.with_counts(ScoreCounts::new(10, 12));
        assert_eq!(merged.cached_counts(), ScoreCounts::new(10, 12));
        assert_eq!(merged.credentials(), session.credentials());
    }

    #[tokio::test]
    async fn missing_file_is_a_guest() {
        let store = FileSessionStore::new(scratch_file("absent.json"));
        assert_eq!(store.load().await.unwrap(), Session::guest());
    }

    #[tokio::test]
    async fn file_store_round_trips_and_keeps_extra_fields() {
        let path = scratch_file("session.json");
        let raw = json!({
            "token": "tok",
            "user": {"_id": "u1", "userName": "mop", "points": 1, "clicked": 2}
        });
        std_fs::write(&path, raw.to_string()).unwrap();

        let store = FileSessionStore::new(&path);
        let session = store.load().await.unwrap();
        store
            .persist(session.with_counts(ScoreCounts::new(5, 9)))
            .await
            .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std_fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["user"]["userName"], json!("mop"));
        assert_eq!(written["user"]["points"], json!(5));
        assert_eq!(written["user"]["clicked"], json!(9));
    }

    #[tokio::test]
    async fn garbage_file_is_a_decode_error() {
        let path = scratch_file("broken.json");
        std_fs::write(&path, "{not json").unwrap();
        let err = FileSessionStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, SessionError::Decode { .. }));
    }
}
