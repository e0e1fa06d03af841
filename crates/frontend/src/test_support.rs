//! Browser mounting helpers for component tests

use gloo::storage::{LocalStorage, Storage};
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::{Element, window};
use yew::{AppHandle, BaseComponent};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Address nothing listens on, so a stray request fails fast
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Start from an empty `localStorage`
pub fn reset_storage() {
    LocalStorage::clear();
}

/// Render `C` into a fresh element appended to the page body
pub fn mount<C>() -> (AppHandle<C>, Element)
where
    C: BaseComponent,
    C::Properties: Default,
{
    let document = window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let handle = yew::Renderer::<C>::with_root(root.clone()).render();
    (handle, root)
}

/// Let effects, redirects and spawned tasks run
pub async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(100)).await;
}

/// Move the browser to `path` before a router mounts
pub fn go_to(path: &str) {
    window()
        .unwrap()
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
}

pub fn pathname() -> String {
    window().unwrap().location().pathname().unwrap()
}
