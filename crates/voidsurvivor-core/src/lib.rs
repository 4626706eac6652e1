//! Core types and definitions for the Void Survivor simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, hazard species, commands, events, snapshots,
//! and constants. It has no dependency on any runtime or ECS.

pub mod commands;
pub mod components;
pub mod constants;
pub mod error;
pub mod events;
pub mod species;
pub mod state;
pub mod types;
