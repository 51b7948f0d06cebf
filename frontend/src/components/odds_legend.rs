use std::rc::Rc;
use wheel_shared::Segment;
use yew::prelude::*;

use crate::pages::wheel::wheel_utils::format_pct;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OddsLegendProps {
    pub segments: Rc<Vec<Segment>>,
    /// Current probability per segment, in percent.
    pub probabilities: Rc<Vec<f64>>,
    pub spin_count: u64,
}

#[function_component(OddsLegend)]
pub fn odds_legend(props: &OddsLegendProps) -> Html {
    html! {
        <div class={styles::LEGEND}>
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{"Current odds"}</h2>
                <span class={styles::TEXT_SMALL}>{format!("{} spins", props.spin_count)}</span>
            </div>
            <div class="grid gap-2">
                { for props.segments.iter().zip(props.probabilities.iter()).map(|(segment, pct)| html! {
                    <div key={segment.label.clone()} class={styles::LEGEND_ROW}>
                        <div class="flex items-center gap-3 min-w-0">
                            <span
                                class="inline-block w-3 h-3 rounded-full flex-shrink-0"
                                style={format!("background: {};", segment.color)}
                            ></span>
                            <span class="truncate text-gray-700 dark:text-gray-300">{&segment.label}</span>
                        </div>
                        <span class="font-mono text-sm text-gray-900 dark:text-white">{format_pct(*pct)}</span>
                    </div>
                }) }
            </div>
        </div>
    }
}
