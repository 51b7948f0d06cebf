mod effects;
mod wheel_canvas;
pub mod wheel_utils;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::rc::Rc;
use web_sys::HtmlButtonElement;
use wheel_shared::{drive_spin, spawn_confetti, CounterStore, SessionEvent};
use yew::prelude::*;

use crate::components::OddsLegend;
use crate::hooks::{use_style, use_wheel_session};
use crate::scheduler::RafScheduler;
use crate::styles;

use effects::{EffectsAction, EffectsLayer, EffectsState};
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultModal, SpinButton};

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    use_style(styles::WHEEL_CSS);

    let (session, store) = use_wheel_session();
    let rng = use_mut_ref(SmallRng::from_entropy);
    let next_effect_id = use_mut_ref(|| 0u32);

    let segments = {
        let session = session.clone();
        use_memo((), move |_| session.borrow().segments().to_vec())
    };

    // Re-render triggers fed by session events; highlight and result are
    // read from the session itself.
    let rotation = use_state(|| session.borrow().rotation());
    let is_spinning = use_state(|| false);
    let spin_count = use_state(|| session.borrow().spin_count());
    let effects = use_reducer(EffectsState::default);
    let force_update = use_force_update();
    let spin_button_ref = use_node_ref();

    let probabilities = {
        let session = session.clone();
        use_memo(*spin_count, move |_| session.borrow().probabilities())
    };

    let on_spin = {
        let session = session.clone();
        let store = store.clone();
        let rng = rng.clone();
        let next_effect_id = next_effect_id.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let spin_count = spin_count.clone();
        let dispatcher = effects.dispatcher();

        Callback::from(move |_: MouseEvent| {
            let picked = session.borrow_mut().request_spin(&mut *rng.borrow_mut());
            if picked.is_none() {
                return;
            }

            is_spinning.set(true);

            let effects_config = session.borrow().config().effects.clone();

            let observer: Rc<dyn Fn(SessionEvent)> = {
                let session = session.clone();
                let store = store.clone();
                let rng = rng.clone();
                let next_effect_id = next_effect_id.clone();
                let rotation = rotation.clone();
                let is_spinning = is_spinning.clone();
                let spin_count = spin_count.clone();
                let dispatcher = dispatcher.clone();

                Rc::new(move |event| match event {
                    SessionEvent::Frame { rotation: angle } => rotation.set(angle),
                    SessionEvent::Landed { rotation: angle, .. } => {
                        rotation.set(angle);

                        let id = {
                            let mut next = next_effect_id.borrow_mut();
                            *next = next.wrapping_add(1);
                            *next
                        };
                        let pieces =
                            spawn_confetti(&mut *rng.borrow_mut(), effects_config.confetti_count);
                        dispatcher.dispatch(EffectsAction::Celebrate { id, pieces });

                        let ring_dispatcher = dispatcher.clone();
                        Timeout::new(effects_config.flash_ring_lifetime_ms, move || {
                            ring_dispatcher.dispatch(EffectsAction::ExpireRing(id));
                        })
                        .forget();
                        let burst_dispatcher = dispatcher.clone();
                        Timeout::new(effects_config.confetti_lifetime_ms, move || {
                            burst_dispatcher.dispatch(EffectsAction::ExpireBurst(id));
                        })
                        .forget();
                    }
                    SessionEvent::Completed { index, spin_count: count } => {
                        if let Err(e) = store.borrow_mut().save(count) {
                            log::error!("Failed to save spin count: {}", e);
                        }
                        if let Some(segment) = session.borrow().segments().get(index) {
                            log::info!("Spin {} landed on {:?}", count, segment.label);
                        }

                        spin_count.set(count);
                        is_spinning.set(false);
                    }
                    SessionEvent::Holding | SessionEvent::Idle => {}
                })
            };

            drive_spin(session.clone(), RafScheduler, observer);
        })
    };

    let on_close = {
        let session = session.clone();
        let spin_button_ref = spin_button_ref.clone();
        Callback::from(move |_| {
            let dismissed = session.borrow_mut().dismiss_result();
            if dismissed {
                force_update.force_update();
                // Hand focus back to the wheel
                if let Some(button) = spin_button_ref.cast::<HtmlButtonElement>() {
                    let _ = button.focus();
                }
            }
        })
    };

    let (highlight, result_label) = {
        let session = session.borrow();
        (
            session.highlighted(),
            session.result().map(|segment| AttrValue::from(segment.label.clone())),
        )
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CARD}>
                <h1 class={styles::TITLE}>
                    <span class={styles::TITLE_GRADIENT}>{"Spin the Wheel"}</span>
                </h1>

                <div class={styles::WHEEL_WRAPPER}>
                    <WheelCanvas
                        segments={segments.clone()}
                        rotation={*rotation}
                        highlight={highlight}
                        is_spinning={*is_spinning}
                    />
                    <EffectsLayer state={(*effects).clone()} />
                    <SpinButton
                        is_spinning={*is_spinning}
                        onclick={on_spin}
                        node_ref={spin_button_ref}
                    />
                </div>

                <p class={classes!(styles::TEXT_SMALL, "text-center")}>
                    {"The slices are all the same size. The odds are not."}
                </p>

                <OddsLegend
                    segments={segments}
                    probabilities={probabilities}
                    spin_count={*spin_count}
                />
            </div>

            <ResultModal label={result_label} on_close={on_close} />
        </div>
    }
}
