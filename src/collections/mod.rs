//! Storage primitives backing the graph containers.
//!
//! - `slot_map`: generational arena with ABA-safe keys

pub mod slot_map;

pub use slot_map::{SlotKey, SlotMap};
