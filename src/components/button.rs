//! Button Component
//!
//! Styled button with variants and a loading spinner.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Icon,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Icon => "btn-icon",
        }
    }
}

/// Button that swaps its label for a spinner while `loading`
///
/// # Arguments
/// * `button_type` - HTML `type` attribute ("button" or "submit")
/// * `disabled` / `loading` - either one disables the button
/// * `on_click` - optional click handler
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
    #[prop(into, default = false.into())] loading: Signal<bool>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<web_sys::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let base_class = format!("btn btn-md {} {}", variant.class(), class);
    let button_class = move || {
        let mut c = base_class.clone();
        if loading.get() {
            c.push_str(" btn-loading");
        }
        if disabled.get() {
            c.push_str(" btn-disabled");
        }
        c
    };

    view! {
        <button
            type=button_type
            class=button_class
            disabled=move || disabled.get() || loading.get()
            aria-label=aria_label
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            <Show when=move || loading.get()>
                <div class="btn-spinner">
                    <div class="spinner"></div>
                </div>
            </Show>
            <span class="btn-label" class:hidden=move || loading.get()>
                {children()}
            </span>
        </button>
    }
}
