//! Folder Row Component
//!
//! Drop target for content drags. Clicking the row toggles expansion; the
//! "edit" / "del" actions open the rename and delete modals.

use leptos::prelude::*;
use library_core::dnd::DropTarget;
use library_core::Folder;

use crate::context::{AppContext, LibraryDnd};
use crate::store::use_library_actions;

#[component]
pub fn FolderRow(folder: Folder, expanded: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = use_context::<LibraryDnd>().expect("LibraryDnd should be provided");
    let actions = use_library_actions();

    let target = DropTarget::Folder(folder.id.clone());
    let target_key = target.key();
    let is_over = move || dnd.drop_target.get().as_ref() == Some(&target);

    let row_class = move || {
        let mut c = String::from("folder-row folder-row--clickable");
        if is_over() {
            c.push_str(" folder-row--drag-over");
        }
        c
    };

    let id = folder.id.clone();
    let on_toggle = move |_| {
        // A drop on this row must not also toggle it
        if dnd.drag_just_ended() {
            return;
        }
        actions.toggle_folder_expansion(&id);
    };

    let for_rename = folder.clone();
    let on_rename = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.open_rename_folder(for_rename.clone());
    };
    let for_delete = folder.clone();
    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.open_delete_folder(for_delete.clone());
    };

    let count = (!folder.is_empty()).then(|| {
        view! { <span class="folder-row__count">"(" {folder.len()} ")"</span> }
    });

    view! {
        <tr class=row_class data-dnd-target=target_key on:click=on_toggle>
            <td class="folder-row__cell">
                <div class="folder-row__container">
                    <span class="folder-row__expand-text">{if expanded { "−" } else { "+" }}</span>
                    <span class="folder-row__title">{folder.name.clone()}</span>
                    {count}
                </div>
            </td>

            <td class="folder-row__cell"></td>

            <td class="folder-row__cell"></td>

            <td class="folder-row__cell folder-row__cell--actions">
                <div class="folder-row__actions">
                    <span class="folder-row__action-text" role="button" on:click=on_rename>
                        "edit"
                    </span>
                    <span
                        class="folder-row__action-text folder-row__action-text--danger"
                        role="button"
                        on:click=on_delete
                    >
                        "del"
                    </span>
                </div>
            </td>
        </tr>
    }
}
