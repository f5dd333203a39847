//! The player's weapon: what they carry decides the fight.

/// What the player carries into a fight.
///
/// A session starts with the dagger; the first cave visit swaps it for the
/// Sword of Slaying, permanently for that session. The fight outcome
/// depends only on this value, never on how it was acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weapon {
    /// The trusty (but not very effective) starting blade.
    Dagger,
    /// The magical sword found in the cave; routs the enemy on sight.
    SwordOfSlaying,
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dagger => write!(f, "dagger"),
            Self::SwordOfSlaying => write!(f, "Sword of Slaying"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Weapon::Dagger.to_string(), "dagger");
        assert_eq!(Weapon::SwordOfSlaying.to_string(), "Sword of Slaying");
    }
}
