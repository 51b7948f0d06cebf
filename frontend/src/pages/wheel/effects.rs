use std::rc::Rc;
use wheel_shared::ConfettiPiece;
use yew::prelude::*;

/// One landing celebration: a flash ring plus a burst of confetti.
///
/// The ring and the burst expire independently; each carries the id of the
/// landing that spawned it so late timers only remove their own elements.
#[derive(Clone, PartialEq)]
pub struct Burst {
    pub id: u32,
    pub pieces: Vec<ConfettiPiece>,
}

#[derive(Clone, PartialEq, Default)]
pub struct EffectsState {
    pub rings: Vec<u32>,
    pub bursts: Vec<Burst>,
}

pub enum EffectsAction {
    Celebrate { id: u32, pieces: Vec<ConfettiPiece> },
    ExpireRing(u32),
    ExpireBurst(u32),
}

impl Reducible for EffectsState {
    type Action = EffectsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EffectsAction::Celebrate { id, pieces } => {
                next.rings.push(id);
                next.bursts.push(Burst { id, pieces });
            }
            EffectsAction::ExpireRing(id) => next.rings.retain(|ring| *ring != id),
            EffectsAction::ExpireBurst(id) => next.bursts.retain(|burst| burst.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct EffectsLayerProps {
    pub state: EffectsState,
}

/// Flash rings and confetti drawn over the wheel.
#[function_component(EffectsLayer)]
pub fn effects_layer(props: &EffectsLayerProps) -> Html {
    html! {
        <>
            { for props.state.rings.iter().map(|id| html! {
                <div key={format!("ring-{}", id)} class="flash-ring"></div>
            }) }
            <div id="confetti" aria-hidden="true">
                { for props.state.bursts.iter().flat_map(|burst| {
                    burst.pieces.iter().enumerate().map(move |(i, piece)| html! {
                        <i
                            key={format!("confetti-{}-{}", burst.id, i)}
                            class="confetti-piece"
                            style={piece.style()}
                        ></i>
                    })
                }) }
            </div>
        </>
    }
}
