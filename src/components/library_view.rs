//! Library View Component
//!
//! Picks between spinner, error, empty state and the table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::content_table::ContentTable;
use super::empty_state::EmptyState;
use super::error_state::ErrorState;
use super::loading::Loading;
use crate::context::AppContext;
use crate::store::{use_app_store, use_library_actions, AppStateStoreFields};

const OPERATION_ERROR_MESSAGE: &str = "No se pudo completar la operación. Por favor, inténtalo de nuevo.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewState {
    Loading,
    Error,
    Empty,
    Table,
}

#[component]
pub fn LibraryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let actions = use_library_actions();

    // Once there is something to show, the table stays up while operations run
    let view_state = Memo::new(move |_| {
        store.library().with(|state| {
            if state.has_content() {
                ViewState::Table
            } else if state.is_loading {
                ViewState::Loading
            } else if state.is_error {
                ViewState::Error
            } else {
                ViewState::Empty
            }
        })
    });
    let is_error = move || store.library().with(|state| state.is_error);

    let on_retry = Callback::new(move |_| {
        spawn_local(async move {
            actions.reload().await;
        });
    });
    let on_create_folder = Callback::new(move |_| ctx.open_create_folder());

    move || match view_state.get() {
        ViewState::Loading => view! { <Loading /> }.into_any(),
        ViewState::Error => view! { <ErrorState on_retry=on_retry /> }.into_any(),
        ViewState::Empty => view! { <EmptyState on_create_folder=on_create_folder /> }.into_any(),
        ViewState::Table => view! {
            <div class="my-library">
                <Show when=is_error>
                    <ErrorState inline=true message=OPERATION_ERROR_MESSAGE on_retry=on_retry />
                </Show>
                <ContentTable />
            </div>
        }
        .into_any(),
    }
}
