//! Create Folder Modal

use leptos::prelude::*;
use leptos::task::spawn_local;
use library_core::domain::validate_folder_name;

use super::button::{Button, ButtonVariant};
use super::modal::{name_error_message, Modal};
use crate::context::AppContext;
use crate::store::{use_app_store, use_library_actions, AppStateStoreFields};

#[component]
pub fn CreateFolderModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let actions = use_library_actions();
    let max_len = ctx.folder_name_max_len;

    let (folder_name, set_folder_name) = signal(String::new());
    let (invalid, set_invalid) = signal(None::<String>);
    let is_loading = Signal::derive(move || store.library().with(|state| state.is_loading));
    let is_blank = Signal::derive(move || folder_name.with(|name| name.trim().is_empty()));

    let on_close = Callback::new(move |_| ctx.close_modal());
    // The request may settle after this modal was closed and another opened
    let opened = ctx.current_modal();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = match validate_folder_name(&folder_name.get_untracked(), max_len) {
            Ok(name) => name,
            Err(err) => {
                log::debug!("[APP] {}", err);
                set_invalid.set(Some(name_error_message(max_len)));
                return;
            }
        };
        set_invalid.set(None);
        spawn_local(async move {
            if actions.create_folder(name).await {
                set_folder_name.set(String::new());
                ctx.close_modal_if(opened);
            }
        });
    };

    view! {
        <Modal title="Crear nueva carpeta" on_close=on_close>
            <div class="modal-intro">
                <p>
                    "Ingresa el nombre para la nueva carpeta. Podrás organizar tu contenido arrastrándolo hacia la carpeta una vez creada."
                </p>
            </div>

            <form class="modal-form" on:submit=on_submit>
                <div class="modal-form-group">
                    <label for="folder-name" class="modal-form-label">
                        "Nombre de la carpeta"
                    </label>
                    <input
                        id="folder-name"
                        type="text"
                        class="form-input"
                        placeholder="Ej: Materiales de matemáticas"
                        maxlength=max_len
                        autofocus
                        required
                        prop:value=move || folder_name.get()
                        prop:disabled=move || is_loading.get()
                        on:input=move |ev| set_folder_name.set(event_target_value(&ev))
                    />
                    {move || invalid.get().map(|message| view! { <p class="modal-form-error">{message}</p> })}
                </div>

                <div class="modal-form-actions">
                    <Button variant=ButtonVariant::Secondary disabled=is_loading on_click=move |_| ctx.close_modal()>
                        "Cancelar"
                    </Button>
                    <Button button_type="submit" loading=is_loading disabled=is_blank>
                        "Crear"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
