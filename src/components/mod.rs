//! ECS components for scene entities.
//!
//! This module groups all component types that can be attached to entities in
//! the showcase scene. Components define data such as transforms, material
//! parameters, lights, and per-animator state.
//!
//! Submodules overview:
//! - [`attachedto`] – rigid position follow of a parent entity plus offset
//! - [`displayobject`] – identity (id, label) of an interactive display object
//! - [`door`] – open/closed command and smoothed vertical offset of the door
//! - [`hover`] – hover flag and hover-driven motion parameters
//! - [`material`] – surface color and emissive parameters
//! - [`particle`] – velocity and age of a recycled drifting particle
//! - [`pointlight`] – point light parameters plus headlight/underlight roles
//! - [`position`] – world-space position
//! - [`ring`] – index of a light ring along the cyclic axis
//! - [`rotation`] – per-axis rotation in radians
//! - [`scale`] – 3D scale factor
//! - [`texturescroll`] – scrolling UV offset for tiling surfaces
//! - [`wheel`] – continuous spin rate for a wheel node

pub mod attachedto;
pub mod displayobject;
pub mod door;
pub mod hover;
pub mod material;
pub mod particle;
pub mod pointlight;
pub mod position;
pub mod ring;
pub mod rotation;
pub mod scale;
pub mod texturescroll;
pub mod wheel;
