//! UI components shared by the editor and management pages.

pub mod code_editor;
pub mod confirm_dialog;
pub mod diagram_card;
pub mod notification_banner;
pub mod preview_pane;
pub mod splitter_handle;
pub mod toolbar;
