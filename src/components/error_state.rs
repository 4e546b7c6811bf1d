//! Error State Component
//!
//! Shown when the library could not be loaded or an operation failed.
//! The latest error captured by the logger is offered as detail text.

use leptos::prelude::*;

pub const DEFAULT_ERROR_MESSAGE: &str = "Error al cargar el contenido. Por favor, inténtalo de nuevo.";

#[component]
pub fn ErrorState(
    #[prop(into, default = DEFAULT_ERROR_MESSAGE.to_string())] message: String,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
    #[prop(into, default = "Reintentar".to_string())] retry_text: String,
    /// Compact banner above the table instead of the full-page state
    #[prop(optional)]
    inline: bool,
) -> impl IntoView {
    let detail = rolling_logger::last_error().map(|entry| entry.message);
    let container_class = if inline { "error-container error-container--inline" } else { "error-container" };

    view! {
        <div class=container_class role="alert">
            <div class="error-content">
                <Show when=move || !inline>
                    <div class="error-icon">
                        <svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <circle cx="12" cy="12" r="10" />
                            <line x1="15" y1="9" x2="9" y2="15" />
                            <line x1="9" y1="9" x2="15" y2="15" />
                        </svg>
                    </div>
                </Show>
                <p class="error-message">{message}</p>
                {detail.map(|detail| view! { <p class="error-detail">{detail}</p> })}
                {on_retry.map(|on_retry| view! {
                    <button class="error-retry-btn" on:click=move |_| on_retry.run(())>
                        {retry_text}
                    </button>
                })}
            </div>
        </div>
    }
}
