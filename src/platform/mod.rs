//! Platform abstraction layer
//!
//! Browser-independent pieces of the host integration:
//! - Input event mapping
//! - Frame timing

pub mod clock;
pub mod input;

pub use clock::FixedTimestep;
pub use input::{KeyAction, TickInput, key_action, pointer_to_paddle_x};
