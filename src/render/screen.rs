//! Last rendered value of every display target

use super::Renderer;
use crate::state::{Affordances, Control};

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub timer: String,
    pub low_time: bool,
    pub output: String,
    pub health: String,
    pub room: String,
    pub inventory: String,
    pub enemies: String,
    pub objective_visible: bool,
    pub controls: Affordances,
}

impl Screen {
    /// A blank screen with every control disabled
    pub fn new() -> Self {
        Self {
            timer: String::new(),
            low_time: false,
            output: String::new(),
            health: String::new(),
            room: String::new(),
            inventory: String::new(),
            enemies: String::new(),
            objective_visible: false,
            controls: Affordances::none(),
        }
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        self.controls.is_enabled(control)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Screen {
    fn timer(&mut self, text: &str, low_time: bool) {
        self.timer = text.to_string();
        self.low_time = low_time;
    }

    fn output(&mut self, text: &str) {
        self.output = text.to_string();
    }

    fn health(&mut self, text: &str) {
        self.health = text.to_string();
    }

    fn room(&mut self, text: &str) {
        self.room = text.to_string();
    }

    fn inventory(&mut self, text: &str) {
        self.inventory = text.to_string();
    }

    fn enemies(&mut self, text: &str) {
        self.enemies = text.to_string();
    }

    fn objective(&mut self, visible: bool) {
        self.objective_visible = visible;
    }

    fn controls(&mut self, affordances: &Affordances) {
        self.controls = *affordances;
    }
}
