//! Frame-driven animation and interaction engine for an interactive
//! showroom scene.
//!
//! The scene is a small ECS world: cars with hover reactions, a garage door
//! on an ease-toward animation, a recycled particle pool, traveling light
//! rings, and scrolling floor surfaces. A host render loop owns the actual
//! drawing; this crate owns all per-frame state. Each frame the host calls
//! [`Showroom::tick`] with the raw frame delta and then reads positions,
//! rotations, scales, and material parameters back out of the world.
//!
//! Pointer interaction is push-based: the host hit-tests in its own space
//! and forwards enter/exit/click events by object id. Hover flags, selection
//! notifications, and the cursor-style output all derive from that queue
//! inside the next tick.

pub mod components;
pub mod config;
pub mod events;
pub mod resources;
pub mod scene;
pub mod systems;

pub use config::{CarDescriptor, ConfigError, DescriptorError, ShowroomConfig, load_descriptors};
pub use resources::effects::EffectKind;
pub use scene::Showroom;
