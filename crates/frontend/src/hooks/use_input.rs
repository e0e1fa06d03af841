//! Controlled text inputs

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// State for a controlled `<input>` and the `oninput` callback that feeds it
#[hook]
pub fn use_input() -> (UseStateHandle<String>, Callback<InputEvent>) {
    let value = use_state(String::new);
    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };
    (value, oninput)
}
