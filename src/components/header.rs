//! Header Component
//!
//! Search box plus the "Nueva carpeta" action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::button::Button;
use super::icons::PlusIcon;
use crate::context::AppContext;
use crate::store::{use_app_store, use_library_actions, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let actions = use_library_actions();

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let search = store.search().get_untracked();
        log::info!("[APP] Searching {:?}", search);
        spawn_local(async move {
            actions.load(Some(search)).await;
        });
    };

    view! {
        <header class="header">
            <div class="header__container">
                <h1 class="header__title">"Mi biblioteca"</h1>
                <form class="header__search" role="search" on:submit=on_search>
                    <input
                        type="search"
                        class="form-input header__search-input"
                        placeholder="Buscar carpetas y recursos"
                        prop:value=move || store.search().get()
                        on:input=move |ev| *store.search().write() = event_target_value(&ev)
                    />
                </form>
                <div class="header__actions">
                    <Button class="header__create-button" on_click=move |_| ctx.open_create_folder()>
                        <PlusIcon size=16 />
                        "Nueva carpeta"
                    </Button>
                </div>
            </div>
        </header>
    }
}
