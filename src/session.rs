//! Concurrent registry of running games.
//!
//! Each session is a [`Game`] behind its own mutex, so moves for one game
//! are applied one at a time in the order they arrive while different games
//! never wait on each other. The map itself sits behind a read-write lock
//! that is only held long enough to look a session up or to insert/remove
//! one.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use parking_lot::{Mutex, RwLock};
use rand::Rng;

use crate::game::Game;

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A shared handle to one game.
pub type Session = Arc<Mutex<Game>>;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No session with this id
    NotFound { id: GameId },
    /// The registry already holds as many games as it can
    Full { max_sessions: usize },
    /// The id contains characters outside `[A-Z0-9]`
    InvalidId { id: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotFound { id } => write!(f, "Game {id} not found"),
            SessionError::Full { max_sessions } => {
                write!(f, "Session limit of {max_sessions} games reached")
            }
            SessionError::InvalidId { id } => write!(f, "Invalid game id '{id}'"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Short upper-case alphanumeric game identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(String);

impl GameId {
    fn random(rng: &mut impl Rng, len: usize) -> Self {
        let id = (0..len)
            .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
            .collect();
        GameId(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GameId {
    type Err = SessionError;

    /// Ids are matched case-insensitively: `ab12cd` names game `AB12CD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_uppercase();
        if id.is_empty() || !id.bytes().all(|b| ID_ALPHABET.contains(&b)) {
            return Err(SessionError::InvalidId { id: s.to_string() });
        }
        Ok(GameId(id))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Characters in a generated id
    pub id_length: usize,
    /// Games the registry holds at once
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            id_length: 6,
            max_sessions: 1024,
        }
    }
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    config: SessionConfig,
    sessions: RwLock<HashMap<GameId, Session>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        SessionRegistry {
            config: SessionConfig {
                id_length: config.id_length.max(1),
                ..config
            },
            sessions: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Games the registry can hold: `max_sessions`, or fewer when ids are too
    /// short to name that many.
    #[must_use]
    pub fn capacity(&self) -> usize {
        let ids = u32::try_from(self.config.id_length)
            .ok()
            .and_then(|len| ID_ALPHABET.len().checked_pow(len))
            .unwrap_or(usize::MAX);
        self.config.max_sessions.min(ids)
    }

    /// Start a new game under a fresh random id.
    pub fn create(&self) -> Result<GameId, SessionError> {
        let capacity = self.capacity();
        let mut sessions = self.sessions.write();
        if sessions.len() >= capacity {
            return Err(SessionError::Full {
                max_sessions: capacity,
            });
        }

        let mut rng = rand::thread_rng();
        let id = loop {
            let candidate = GameId::random(&mut rng, self.config.id_length);
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };

        sessions.insert(id.clone(), Arc::new(Mutex::new(Game::new())));
        debug!("created game {id} ({} active)", sessions.len());
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, id: &GameId) -> Option<Session> {
        self.sessions.read().get(id).cloned()
    }

    /// Run `f` with exclusive access to one game.
    ///
    /// The registry lock is released before the game lock is taken.
    pub fn with_game<R>(
        &self,
        id: &GameId,
        f: impl FnOnce(&mut Game) -> R,
    ) -> Result<R, SessionError> {
        let session = self
            .get(id)
            .ok_or_else(|| SessionError::NotFound { id: id.clone() })?;
        let mut game = session.lock();
        Ok(f(&mut game))
    }

    pub fn remove(&self, id: &GameId) -> Option<Session> {
        let removed = self.sessions.write().remove(id);
        if removed.is_some() {
            debug!("removed game {id}");
        }
        removed
    }

    #[must_use]
    pub fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.sessions.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_ids_use_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let id = GameId::random(&mut rng, 6);
            assert_eq!(id.as_str().len(), 6);
            assert!(id.as_str().bytes().all(|b| ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_id_parsing_is_case_insensitive() {
        let id: GameId = "ab12cd".parse().unwrap();
        assert_eq!(id.to_string(), "AB12CD");
        assert_eq!(id, " AB12CD ".parse::<GameId>().unwrap());
        assert!(matches!(
            "ab-12".parse::<GameId>(),
            Err(SessionError::InvalidId { .. })
        ));
        assert!("".parse::<GameId>().is_err());
    }

    #[test]
    fn test_create_get_remove() {
        let registry = SessionRegistry::new(SessionConfig::default());
        assert!(registry.is_empty());

        let id = registry.create().unwrap();
        assert_eq!(id.as_str().len(), 6);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&id).is_some());

        let lower: GameId = id.as_str().to_ascii_lowercase().parse().unwrap();
        assert!(registry.get(&lower).is_some());

        assert!(registry.remove(&id).is_some());
        assert!(registry.remove(&id).is_none());
        assert_eq!(
            registry.with_game(&id, |_| ()),
            Err(SessionError::NotFound { id })
        );
    }

    #[test]
    fn test_registry_limit() {
        let registry = SessionRegistry::new(SessionConfig {
            id_length: 8,
            max_sessions: 2,
        });
        registry.create().unwrap();
        registry.create().unwrap();
        assert_eq!(
            registry.create(),
            Err(SessionError::Full { max_sessions: 2 })
        );
        assert_eq!(registry.ids().len(), 2);
    }

    #[test]
    fn test_zero_length_ids_are_widened() {
        let registry = SessionRegistry::new(SessionConfig {
            id_length: 0,
            max_sessions: 4,
        });
        assert_eq!(registry.config().id_length, 1);
        assert_eq!(registry.create().unwrap().as_str().len(), 1);
    }

    #[test]
    fn test_short_ids_limit_capacity() {
        let registry = SessionRegistry::new(SessionConfig {
            id_length: 1,
            max_sessions: 100,
        });
        assert_eq!(registry.capacity(), 36);

        for _ in 0..36 {
            registry.create().unwrap();
        }
        assert_eq!(
            registry.create(),
            Err(SessionError::Full { max_sessions: 36 })
        );
        assert_eq!(registry.len(), 36);

        let id = registry.ids()[0].clone();
        registry.remove(&id);
        assert!(registry.create().is_ok());
    }

    #[test]
    fn test_long_ids_keep_configured_capacity() {
        let registry = SessionRegistry::new(SessionConfig {
            id_length: 64,
            max_sessions: 3,
        });
        assert_eq!(registry.capacity(), 3);
    }
}
