use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlButtonElement, KeyboardEvent};
use yew::prelude::*;

use crate::styles;

/// Formats a probability for display, e.g. `26.47%`.
pub fn format_pct(value: f64) -> String {
    if value == 0.0 {
        "0%".to_string()
    } else if (value - value.round()).abs() < 1e-9 {
        format!("{}%", value.round())
    } else {
        format!("{:.2}%", value)
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "SPIN" };

    let button_class = if props.is_spinning {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON_ACTIVE
    };

    // Pulse only while the wheel is ready
    let animation_class = if props.is_spinning { "" } else { "animate-pulse-subtle" };

    html! {
        <button
            ref={props.node_ref.clone()}
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            aria-label="Spin the wheel"
            class={classes!(
                "absolute",
                "left-1/2",
                "top-1/2",
                "-translate-x-1/2",
                "-translate-y-1/2",
                "w-24",
                "h-24",
                "rounded-full",
                "font-bold",
                "text-sm",
                "border-4",
                "border-white/70",
                "transition-all",
                "duration-300",
                "focus:outline-none",
                "focus:ring-4",
                "focus:ring-yellow-300",
                button_class,
                animation_class
            )}
        >
            {button_text}
        </button>
    }
}

// Result modal component
#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    /// Winning label; the modal is hidden when `None`.
    pub label: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let close_ref = use_node_ref();
    let is_open = props.label.is_some();

    // Move focus to the close button when the modal opens
    {
        let close_ref = close_ref.clone();
        use_effect_with(is_open, move |is_open| {
            if *is_open {
                if let Some(button) = close_ref.cast::<HtmlButtonElement>() {
                    let _ = button.focus();
                }
            }
            || ()
        });
    }

    // Escape closes the modal while it is open
    {
        let on_close = props.on_close.clone();
        use_effect_with(is_open, move |is_open| {
            let listener = if *is_open {
                window().map(|window| {
                    EventListener::new(&window, "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .map(|e| e.key() == "Escape")
                            .unwrap_or(false);
                        if is_escape {
                            on_close.emit(());
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let Some(label) = props.label.clone() else {
        return html! {};
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={styles::MODAL_OVERLAY}
            role="dialog"
            aria-modal="true"
            aria-hidden="false"
            onclick={on_backdrop}
        >
            <div
                class={styles::MODAL_CARD}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <p class="text-sm uppercase tracking-widest text-gray-400">{"The wheel has spoken"}</p>
                <h3 class="mt-3 text-3xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-yellow-300 to-orange-500">
                    {label}
                </h3>
                <button ref={close_ref} type="button" class={styles::MODAL_BUTTON} onclick={on_button}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
