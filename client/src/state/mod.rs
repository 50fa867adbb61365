//! Reactive state shared through Leptos context.

pub mod editor;
pub mod manage;
