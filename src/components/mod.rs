//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod content_row;
mod content_table;
mod create_folder_modal;
mod delete_folder_modal;
mod empty_state;
mod error_state;
mod folder_row;
mod header;
mod icons;
mod library_view;
mod loading;
mod modal;
mod rename_folder_modal;

pub use create_folder_modal::CreateFolderModal;
pub use delete_folder_modal::DeleteFolderModal;
pub use header::Header;
pub use library_view::LibraryView;
pub use rename_folder_modal::RenameFolderModal;
