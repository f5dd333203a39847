//! Scoring and narrative state machine for the Wickfield adventure.
//!
//! The engine is a single finite-state machine (`GameSession`) over a small
//! set of narrative stages: an open field, a cave hiding a magical sword,
//! a house hiding the enemy, and the fight that settles the session. Every
//! transition carries a score delta and a batch of narration events.
//!
//! The engine does no I/O and never sleeps. Frontends drive it through
//! three calls: `step` (drain auto-advancing stages), `prompt` (the pending
//! choice, if any), and `choose` (apply a validated choice). The only
//! nondeterminism, the enemy draw, comes from a seeded RNG at session
//! start, so tests can pin it down.

pub mod config;
pub mod enemy;
pub mod error;
pub mod narration;
pub mod score;
pub mod session;
pub mod stage;
pub mod weapon;

pub use config::SessionConfig;
pub use enemy::Enemy;
pub use error::{EngineError, EngineResult};
pub use narration::{Narration, NarrationKind};
pub use score::Score;
pub use session::{GameSession, Prompt};
pub use stage::Stage;
pub use weapon::Weapon;
