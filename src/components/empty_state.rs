//! Empty State Component

use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::icons::FolderIcon;

/// Shown when the library has neither folders nor contents
#[component]
pub fn EmptyState(#[prop(into)] on_create_folder: Callback<()>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__content">
                <div class="empty-state__icon">
                    <FolderIcon size=64 />
                </div>
                <h3 class="empty-state__title">"No tienes contenido organizado"</h3>
                <p class="empty-state__description">
                    "Crea tu primera carpeta para empezar a organizar tus recursos educativos"
                </p>
                <Button
                    variant=ButtonVariant::Primary
                    class="empty-state__button"
                    on_click=move |_| on_create_folder.run(())
                >
                    "Nueva carpeta"
                </Button>
            </div>
        </div>
    }
}
