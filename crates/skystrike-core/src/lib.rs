//! Core types and definitions for the SKYSTRIKE flight-combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, constants, input, events, frame snapshots, and the interfaces
//! to the excluded rendering/terrain/HUD collaborators. It has no dependency
//! on any runtime framework.

pub mod components;
pub mod constants;
pub mod events;
pub mod input;
pub mod services;
pub mod state;
pub mod types;
