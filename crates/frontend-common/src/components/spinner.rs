//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="spinner" role="status">
            <div class="spinner-ring"></div>
            if let Some(text) = &props.text {
                <p class="spinner-text">{text}</p>
            }
        </div>
    }
}
