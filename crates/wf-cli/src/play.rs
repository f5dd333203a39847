//! The interactive play loop: paced narration out, validated choices in.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use wf_engine::{GameSession, Narration, NarrationKind, SessionConfig};

/// Pause after the rejection message, matching the status-line pacing.
const REJECT_PAUSE: Duration = Duration::from_secs(1);

/// Drive one session (and its replays) over stdin/stdout until the player
/// declines to continue or stdin reaches EOF.
pub fn run(seed: u64, fast: bool) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut session = GameSession::new(SessionConfig::default().with_seed(seed));
    let mut line = String::new();

    loop {
        render(&session.step(), fast);
        let Some(prompt) = session.prompt() else { break };

        print!("{}", prompt.text);
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.choose(&line) {
            Ok(events) => render(&events, fast),
            Err(_) => reject(fast),
        }
    }

    Ok(())
}

/// Emit narration lines with their cosmetic pacing.
fn render(events: &[Narration], fast: bool) {
    for event in events {
        match event.kind {
            NarrationKind::Beat => println!("{}", event.text),
            NarrationKind::Status => println!("{}", event.text.bold()),
        }
        if !fast {
            thread::sleep(event.pause());
        }
    }
}

/// The retry message for input outside the prompt's option set.
fn reject(fast: bool) {
    println!("{}", "Sorry, that's not a valid option.".yellow());
    if !fast {
        thread::sleep(REJECT_PAUSE);
    }
}
