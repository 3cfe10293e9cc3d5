//! Loading indicator component.

use yew::prelude::*;

/// Properties for Loading component.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or("Loading...".to_string())]
    pub message: String,
}

/// Centered one-line indicator shown while a fetch is in flight.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="text-center">{ &props.message }</div>
    }
}
