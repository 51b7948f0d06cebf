pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod scheduler;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use crate::pages::wheel::WheelPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::PAGE}>
            <div class="mx-auto">
                <WheelPage />
            </div>
        </div>
    }
}
