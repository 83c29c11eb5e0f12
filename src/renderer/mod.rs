//! Render adapter
//!
//! Turns a read-only view of the game state into vertex lists for a GPU
//! pipeline owned by the host.

pub mod shapes;
pub mod vertex;

pub use shapes::{DrawShape, scene, tessellate, tessellate_all};
pub use vertex::Vertex;
