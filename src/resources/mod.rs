//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `clock` – frame-synchronous elapsed/delta time, the single time source
//! - `cursor` – pointer cursor style the hover router outputs to the host
//! - `effects` – visibility toggles for particles, rings, and the grid
//! - `registry` – named scene nodes keyed by semantic role
//! - `rng` – seeded random source shared by the particle simulator
//! - `selection` – outbox of selected display-object ids for the host UI

pub mod clock;
pub mod cursor;
pub mod effects;
pub mod registry;
pub mod rng;
pub mod selection;
