//! Delete Folder Modal
//!
//! Non-empty folders ask what happens to their contents: move them to the
//! unassigned section (default) or delete them with the folder.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::button::{Button, ButtonVariant};
use super::modal::Modal;
use super::rename_folder_modal::element_count_label;
use crate::context::AppContext;
use crate::store::{use_app_store, use_library_actions, AppStateStoreFields};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteStrategy {
    /// Contents go to the unassigned section
    #[default]
    Move,
    Delete,
}

impl DeleteStrategy {
    pub fn deletes_contents(&self) -> bool {
        matches!(self, DeleteStrategy::Delete)
    }
}

#[component]
pub fn DeleteFolderModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let actions = use_library_actions();

    let on_close = Callback::new(move |_| ctx.close_modal());
    // The request may settle after this modal was closed and another opened
    let opened = ctx.current_modal();

    let Some(folder) = ctx.selected_folder.get_untracked() else {
        return ().into_any();
    };

    // Fresh on every open
    let (strategy, set_strategy) = signal(DeleteStrategy::default());
    let is_loading = Signal::derive(move || store.library().with(|state| state.is_loading));
    let has_content = !folder.is_empty();

    let id = folder.id.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // An empty folder has nothing to move
        let delete_contents = has_content && strategy.get_untracked().deletes_contents();
        let id = id.clone();
        spawn_local(async move {
            if actions.delete_folder(id, delete_contents).await {
                ctx.close_modal_if(opened);
            }
        });
    };

    let options = has_content.then(|| {
        view! {
            <div class="modal-form-group">
                <label class="modal-form-label">"¿Qué hacer con el contenido?"</label>

                <div class="delete-modal-options">
                    <label class="delete-option" for="move-option">
                        <input
                            id="move-option"
                            type="radio"
                            name="deleteOption"
                            value="move"
                            prop:checked=move || strategy.get() == DeleteStrategy::Move
                            prop:disabled=move || is_loading.get()
                            on:change=move |_| set_strategy.set(DeleteStrategy::Move)
                        />
                        <div class="delete-option-content">
                            <h5>"Mover contenido sin asignar"</h5>
                            <p>"Se eliminará solo la carpeta, el contenido se moverá a la sección \"Sin asignar\""</p>
                        </div>
                    </label>

                    <label class="delete-option" for="delete-option">
                        <input
                            id="delete-option"
                            type="radio"
                            name="deleteOption"
                            value="delete"
                            prop:checked=move || strategy.get() == DeleteStrategy::Delete
                            prop:disabled=move || is_loading.get()
                            on:change=move |_| set_strategy.set(DeleteStrategy::Delete)
                        />
                        <div class="delete-option-content">
                            <h5>"Eliminar todo el contenido"</h5>
                            <p>"Se eliminará la carpeta y todo su contenido permanentemente"</p>
                        </div>
                    </label>
                </div>
            </div>
        }
    });
    let empty_note = (!has_content).then(|| {
        view! {
            <div class="modal-intro">
                <p>"Esta carpeta está vacía y se puede eliminar sin afectar ningún contenido."</p>
            </div>
        }
    });
    let submit_label = if has_content { "Eliminar carpeta" } else { "Eliminar carpeta vacía" };

    view! {
        <Modal title="Eliminar carpeta" on_close=on_close>
            <div class="delete-modal-warning">
                <h4>"⚠️ Acción irreversible"</h4>
                <p>
                    "Vas a eliminar la carpeta \"" {folder.name.clone()} "\". Esta acción no se puede deshacer."
                </p>
            </div>

            <div class="delete-modal-folder-info">
                <div>
                    <h4>"📁 " {folder.name.clone()}</h4>
                    <p>{element_count_label(folder.len())}</p>
                </div>
            </div>

            <form class="modal-form" on:submit=on_submit>
                {options}
                {empty_note}
                <div class="modal-form-actions">
                    <Button variant=ButtonVariant::Secondary disabled=is_loading on_click=move |_| ctx.close_modal()>
                        "Cancelar"
                    </Button>
                    <Button variant=ButtonVariant::Danger button_type="submit" loading=is_loading>
                        {submit_label}
                    </Button>
                </div>
            </form>
        </Modal>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy_keeps_contents() {
        assert_eq!(DeleteStrategy::default(), DeleteStrategy::Move);
        assert!(!DeleteStrategy::Move.deletes_contents());
        assert!(DeleteStrategy::Delete.deletes_contents());
    }
}
