mod app;
mod auth_guard;
mod components;
mod hooks;
mod pages;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    passage_frontend_common::logging::init();
    yew::Renderer::<App>::new().render();
}
