//! Platform abstraction layer
//!
//! Browser-facing glue that stays testable natively:
//! - Keyboard mapping and held-key tracking

pub mod input;

pub use input::{Action, KeyState, captures_scroll};
