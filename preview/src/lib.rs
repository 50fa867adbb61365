//! Interaction engine for the diagram preview and the editor layout.
//!
//! Nothing here touches the DOM. The client wires pointer events into
//! [`engine::PreviewCore`] and [`splitter::Splitter`], then carries out the
//! [`engine::Action`]s they return (request an animation frame, restyle the
//! transform surface, swap the cursor, re-layout the code editor). Keeping
//! the state machines free of browser types lets them run under native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::PreviewCore`]: zoom, pan gestures, frame throttling |
//! | [`viewport`] | Zoom/pan state and CSS transform formatting |
//! | [`input`] | Pointer buttons and gesture states |
//! | [`splitter`] | Draggable boundary between editor and preview panes |
//! | [`consts`] | Zoom limits, splitter bounds, layout breakpoint |

pub mod consts;
pub mod engine;
pub mod input;
pub mod splitter;
pub mod viewport;
