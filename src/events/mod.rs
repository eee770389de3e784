//! Event and message types exchanged across systems.
//!
//! Pointer input arrives as messages (queued, drained once per frame by the
//! router); hover and selection notifications go out as observer events so
//! the host can subscribe without polling.
//!
//! Submodules:
//! - [`pointer`] – hit-tested pointer input delivered by the rendering backend
//! - [`hover`] – hover enter/exit notifications per display object
//! - [`select`] – click selection notifications and the outbox observer

pub mod hover;
pub mod pointer;
pub mod select;
