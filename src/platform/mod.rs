//! Platform abstraction layer
//!
//! Host event loops (browser listeners, winit, terminal) feed raw key and
//! pointer events here; the simulation only ever sees `TickInput`.

pub mod input;

pub use input::InputTracker;
