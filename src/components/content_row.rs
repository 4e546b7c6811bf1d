//! Content Row Component
//!
//! One content item in the table. Rows with a drag handle can be picked up by
//! mouse, touch or keyboard; the preview copy under the pointer is inert.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_keydown, make_on_mousedown, make_on_touchstart};
use library_core::ContentItem;

use super::icons::{ContentIcon, DragIcon};
use crate::context::LibraryDnd;

const DEFAULT_OWNER_COLOR: &str = "#6b7280";

/// Avatar color for well-known owners, grey for everyone else
pub fn owner_color(owner: &str) -> &'static str {
    match owner {
        "Editorial" => "#e91e63",
        "Admin. Escuela" => "#f44336",
        "Yo" => "#2196f3",
        _ => DEFAULT_OWNER_COLOR,
    }
}

#[component]
pub fn ContentRow(
    content: ContentItem,
    #[prop(optional)] in_folder: bool,
    #[prop(optional)] can_drag: bool,
    /// Rendered inside the drag overlay
    #[prop(optional)]
    preview: bool,
) -> impl IntoView {
    let dnd = use_context::<LibraryDnd>().expect("LibraryDnd should be provided");
    let draggable = can_drag && !preview;

    let id = content.id.clone();
    let is_dragging = move || !preview && dnd.dragging_id.get().as_ref() == Some(&id);

    let row_class = move || {
        let mut c = String::from("content-row");
        if in_folder {
            c.push_str(" content-row--in-folder");
        }
        if preview {
            c.push_str(" content-row--preview");
        }
        if is_dragging() {
            c.push_str(" content-row--dragging");
        }
        c
    };

    let handle = draggable.then(|| {
        let on_mousedown = make_on_mousedown(dnd, content.id.clone());
        let on_touchstart = make_on_touchstart(dnd, content.id.clone());
        let on_keydown = make_on_keydown(dnd, content.id.clone());
        view! {
            <div
                class="content-row__drag-handle"
                tabindex="0"
                role="button"
                aria-label="Arrastrar"
                on:mousedown=on_mousedown
                on:touchstart=on_touchstart
                on:keydown=on_keydown
            >
                <DragIcon size=14 class="content-row__drag-icon" />
            </div>
        }
    });

    let icon_class = if draggable {
        "content-row__icon-container content-row__icon-container--with-drag"
    } else {
        "content-row__icon-container content-row__icon-container--no-drag"
    };
    let color = owner_color(&content.owner);

    view! {
        <tr class=row_class>
            <td class="content-row__cell">
                <div class="content-row__container">
                    {handle}
                    <div class=icon_class>
                        <ContentIcon kind=content.kind.clone() size=16 class="content-row__icon" />
                    </div>
                    <span class="content-row__title">{content.title.clone()}</span>
                </div>
            </td>

            <td class="content-row__cell">
                <span class="content-row__availability">{content.availability.label()}</span>
            </td>

            <td class="content-row__cell">
                <div class="content-row__owner">
                    <div
                        class="content-row__owner-circle"
                        style:background-color=color
                        title=content.owner.clone()
                    ></div>
                    <div class="content-row__owner-info">
                        <div class="content-row__owner-name">{content.owner.clone()}</div>
                        <div class="content-row__owner-date">{content.date.clone()}</div>
                    </div>
                </div>
            </td>

            <td class="content-row__cell content-row__cell--actions"></td>
        </tr>
    }
}
