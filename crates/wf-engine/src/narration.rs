//! Narrative events emitted by the engine for a frontend to render.

use std::time::Duration;

/// How long a frontend should rest after a full narrative beat.
pub const BEAT_PAUSE: Duration = Duration::from_secs(2);

/// The shorter rest after score displays and other system lines.
pub const STATUS_PAUSE: Duration = Duration::from_secs(1);

/// What a narration line is doing, so a frontend can pace and style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationKind {
    /// A story line.
    Beat,
    /// A score display or other out-of-world line.
    Status,
}

/// One line of narration plus its cosmetic pacing.
///
/// The pause is presentation only; it never affects the state machine, and
/// frontends are free to skip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// The text to emit.
    pub text: String,
    /// The kind of line, which decides pacing and styling.
    pub kind: NarrationKind,
}

impl Narration {
    /// A story line with the default pacing.
    pub fn beat(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NarrationKind::Beat,
        }
    }

    /// A score display or system line with the shorter pacing.
    pub fn status(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NarrationKind::Status,
        }
    }

    /// The pause a frontend should take after emitting this line.
    pub fn pause(&self) -> Duration {
        match self.kind {
            NarrationKind::Beat => BEAT_PAUSE,
            NarrationKind::Status => STATUS_PAUSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beat_pacing() {
        let line = Narration::beat("You peer cautiously into the cave.");
        assert_eq!(line.kind, NarrationKind::Beat);
        assert_eq!(line.pause(), BEAT_PAUSE);
    }

    #[test]
    fn status_pacing() {
        let line = Narration::status("[ Current Score: 0 ]");
        assert_eq!(line.kind, NarrationKind::Status);
        assert_eq!(line.pause(), STATUS_PAUSE);
    }
}
