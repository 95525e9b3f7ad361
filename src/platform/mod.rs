//! Host collaborator contracts
//!
//! The core never talks to an engine directly; whatever drives it (a real
//! engine, the headless demo host, a test harness) implements these seams.

/// Handle the host uses to identify a destructible scene object.
pub type ObjectHandle = u32;

/// Button-state input, polled once per tick.
pub trait InputSource {
    /// Whether the named button is currently held down.
    fn is_button_pressed(&self, button: &str) -> bool;
}

/// Removes objects from the host scene.
///
/// Destruction is irreversible and takes effect before the next tick.
pub trait ObjectRemover {
    fn destroy(&mut self, handle: ObjectHandle);
}
