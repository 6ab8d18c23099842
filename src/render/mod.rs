//! Rendering module
//!
//! The controller only talks to a [`Renderer`]. [`Screen`] keeps the latest
//! value of every target and [`TerminalRenderer`] prints the ones that change.

pub mod screen;
pub mod terminal;

use crate::state::Affordances;

pub use screen::Screen;
pub use terminal::TerminalRenderer;

/// Render calls the controller makes
pub trait Renderer {
    /// Clock text such as `09:59`, with the low-time marker flag
    fn timer(&mut self, text: &str, low_time: bool);
    fn output(&mut self, text: &str);
    fn health(&mut self, text: &str);
    fn room(&mut self, text: &str);
    fn inventory(&mut self, text: &str);
    fn enemies(&mut self, text: &str);
    fn objective(&mut self, visible: bool);
    /// Enable and disable every control at once
    fn controls(&mut self, affordances: &Affordances);
}
