//! Loading Component

use leptos::prelude::*;

/// Spinner with a message
#[component]
pub fn Loading(#[prop(into, default = "Cargando contenido...".to_string())] message: String) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="loading-content">
                <div class="loading-spinner loading-spinner-md">
                    <div class="spinner-ring"></div>
                </div>
                <p class="loading-message">{message}</p>
            </div>
        </div>
    }
}
