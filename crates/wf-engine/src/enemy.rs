//! The enemy menacing the village, drawn once per session.

use rand::Rng;
use rand::rngs::StdRng;

/// The enemy lurking near the village.
///
/// Fixed for the lifetime of one session; a replay draws a fresh one.
/// The choice of enemy is flavor only and never affects a transition or
/// a score delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enemy {
    /// A troll.
    Troll,
    /// A dragon.
    Dragon,
    /// A pirate.
    Pirate,
    /// A wicked faerie.
    WickedFaerie,
}

/// The fixed set a session's enemy is drawn from.
const ENEMIES: &[Enemy] = &[
    Enemy::Troll,
    Enemy::Dragon,
    Enemy::Pirate,
    Enemy::WickedFaerie,
];

impl Enemy {
    /// All possible enemies.
    pub fn all() -> &'static [Self] {
        ENEMIES
    }

    /// Draw a random enemy for a new session.
    pub fn draw(rng: &mut StdRng) -> Self {
        ENEMIES[rng.random_range(0..ENEMIES.len())]
    }
}

impl std::fmt::Display for Enemy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Troll => write!(f, "troll"),
            Self::Dragon => write!(f, "dragon"),
            Self::Pirate => write!(f, "pirate"),
            Self::WickedFaerie => write!(f, "wicked faerie"),
        }
    }
}
