//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are functions that take `&mut World` (or `&World` for read-only)
//! plus whatever engine state they touch. They do not own state — all state
//! lives in components or on the engine.

pub mod collision;
pub mod flight;
pub mod snapshot;
pub mod visuals;
pub mod weapons;
