//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, the rendering
//! engine, downloads) from page and component logic. Each browser call is
//! gated on the `hydrate` feature so server rendering stays deterministic.

pub mod clock;
pub mod editor_bridge;
#[cfg(feature = "hydrate")]
pub mod export;
#[cfg(feature = "hydrate")]
pub mod js;
pub mod keyboard;
pub mod mermaid;
pub mod notify;
pub mod storage;
pub mod timers;
