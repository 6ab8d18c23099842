//! Line-oriented terminal renderer

use std::io::{self, Write};

use tracing::warn;

use super::{Renderer, Screen};
use crate::state::Affordances;

const OBJECTIVE: &str = "🎯 Objective: clear the dungeon of every enemy before the clock runs out. \
Type 'start' to begin.";

/// Prints each display target when its value changes
///
/// The clock is printed on whole minutes and every second once time runs low,
/// so a running game does not flood the terminal.
pub struct TerminalRenderer<W: Write> {
    screen: Screen,
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            screen: Screen::new(),
            out,
        }
    }

    /// What is currently on screen
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn timer(&mut self, text: &str, low_time: bool) {
        if self.screen.timer == text && self.screen.low_time == low_time {
            return;
        }
        self.screen.timer(text, low_time);
        if low_time {
            self.line(&format!("⏱️ Time: {} ⚠", text));
        } else if text.ends_with(":00") {
            self.line(&format!("⏱️ Time: {}", text));
        }
    }

    fn output(&mut self, text: &str) {
        // Repeated messages still print, the player asked for them again
        self.screen.output(text);
        self.line(&format!("» {}", text));
    }

    fn health(&mut self, text: &str) {
        if self.screen.health != text {
            self.screen.health(text);
            self.line(&format!("❤️ Health: {}", text));
        }
    }

    fn room(&mut self, text: &str) {
        if self.screen.room != text {
            self.screen.room(text);
            self.line(&format!("🚪 Room: {}", text));
        }
    }

    fn inventory(&mut self, text: &str) {
        if self.screen.inventory != text {
            self.screen.inventory(text);
            self.line(&format!("💼 Inventory: {}", text));
        }
    }

    fn enemies(&mut self, text: &str) {
        if self.screen.enemies != text {
            self.screen.enemies(text);
            self.line(&format!("🧟 Enemies Remaining: {}", text));
        }
    }

    fn objective(&mut self, visible: bool) {
        if self.screen.objective_visible != visible {
            self.screen.objective(visible);
            if visible {
                self.line(OBJECTIVE);
            }
        }
    }

    fn controls(&mut self, affordances: &Affordances) {
        if self.screen.controls != *affordances {
            self.screen.controls(affordances);
            let enabled: Vec<&str> = affordances.enabled().iter().map(|c| c.label()).collect();
            if enabled.is_empty() {
                self.line("Controls: (none)");
            } else {
                self.line(&format!("Controls: {}", enabled.join(", ")));
            }
        }
    }
}
