//! Diagram model, persistence, render pipeline, and export planning for the
//! Mermaid desk editor.
//!
//! This crate is shared by the browser client and native tests. It owns every
//! rule that does not need a DOM: which names are legal, how the saved
//! collection is encoded, how source text is cleaned up before it reaches the
//! rendering engine, which render result is allowed to reach the screen, and
//! how large a rasterized export should be. The `client` crate supplies the
//! browser pieces (localStorage, the mermaid binding, canvas encoding) through
//! the traits defined here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | UI limits, engine configuration, storage key, default diagram |
//! | [`model`] | The persisted [`model::Diagram`] record |
//! | [`validate`] | Diagram name validation |
//! | [`store`] | [`store::DiagramStore`] over a pluggable key/value backend |
//! | [`render`] | Source normalization and the [`render::RenderPipeline`] |
//! | [`sequence`] | Render tickets that discard stale results |
//! | [`markup`] | Root `<svg>` tag inspection and attribute rewriting |
//! | [`export`] | Vector/raster export planning and error types |
//! | [`notify`] | Transient notification banners |
//! | [`catalog`] | Management list helpers (search, labels, dates) |

pub mod catalog;
pub mod config;
pub mod export;
pub mod markup;
pub mod model;
pub mod notify;
pub mod render;
pub mod sequence;
pub mod store;
pub mod validate;
