use super::range_slider::RangeSlider;
use crate::config;
use crate::model::RangeValue;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| config::load());
    let value = use_state(|| None::<RangeValue>);

    let on_change = {
        let value = value.clone();
        Callback::from(move |v: RangeValue| value.set(Some(v)))
    };

    match &*config {
        Ok(cfg) => html! {
            <div class="app">
                <RangeSlider config={*cfg} {on_change} />
                if let Some(v) = *value {
                    <p class="app__readout">{ format!("Selected: {} – {}", v.min, v.max) }</p>
                }
            </div>
        },
        Err(err) => html! {
            <div class="app app--error">{ format!("Invalid slider configuration: {err}") }</div>
        },
    }
}
