//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use library_core::dnd::DropTarget;
use library_core::{ContentId, Folder};

/// Drag state for content rows
pub type LibraryDnd = DndSignals<ContentId, DropTarget>;

/// Which modal is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    CreateFolder,
    RenameFolder,
    DeleteFolder,
}

/// One opening of a modal. Reopening, even the same kind, gets a new `seq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenModal {
    pub kind: ModalKind,
    seq: u64,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Open modal - read
    pub modal: ReadSignal<Option<OpenModal>>,
    /// Open modal - write
    set_modal: WriteSignal<Option<OpenModal>>,
    opened: StoredValue<u64>,
    /// Folder the rename/delete modal acts on - read
    pub selected_folder: ReadSignal<Option<Folder>>,
    /// Folder the rename/delete modal acts on - write
    set_selected_folder: WriteSignal<Option<Folder>>,
    pub folder_name_max_len: usize,
}

impl AppContext {
    pub fn new(folder_name_max_len: usize) -> Self {
        let (modal, set_modal) = signal(None::<OpenModal>);
        let (selected_folder, set_selected_folder) = signal(None::<Folder>);
        Self {
            modal,
            set_modal,
            opened: StoredValue::new(0),
            selected_folder,
            set_selected_folder,
            folder_name_max_len,
        }
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.modal.get().map(|open| open.kind) == Some(kind)
    }

    /// The modal showing right now, for closing it later with [`Self::close_modal_if`]
    pub fn current_modal(&self) -> Option<OpenModal> {
        self.modal.get_untracked()
    }

    fn open(&self, kind: ModalKind) {
        self.opened.update_value(|seq| *seq += 1);
        let seq = self.opened.get_value();
        self.set_modal.set(Some(OpenModal { kind, seq }));
    }

    pub fn open_create_folder(&self) {
        self.set_selected_folder.set(None);
        self.open(ModalKind::CreateFolder);
    }

    pub fn open_rename_folder(&self, folder: Folder) {
        self.set_selected_folder.set(Some(folder));
        self.open(ModalKind::RenameFolder);
    }

    pub fn open_delete_folder(&self, folder: Folder) {
        self.set_selected_folder.set(Some(folder));
        self.open(ModalKind::DeleteFolder);
    }

    /// Close whatever modal is open and forget the selected folder
    pub fn close_modal(&self) {
        self.set_modal.set(None);
        self.set_selected_folder.set(None);
    }

    /// Close `submitted` if it is still the modal showing. A request that
    /// settles after the user moved on leaves the newer modal alone.
    pub fn close_modal_if(&self, submitted: Option<OpenModal>) -> bool {
        if submitted.is_none() || self.current_modal() != submitted {
            return false;
        }
        self.close_modal();
        true
    }
}
