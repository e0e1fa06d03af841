use crate::app::Route;
use crate::components::{FieldKind, FormField};
use crate::hooks::use_input;
use passage_core::LoginForm;
use passage_frontend_common::{LoadingSpinner, use_notify, use_session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let ctx = use_session();
    let notify = use_notify();
    let navigator = use_navigator();
    let (username, on_username) = use_input();
    let (password, on_password) = use_input();
    let loading = use_state(|| false);

    let onsubmit = {
        let auth = ctx.auth().clone();
        let username = username.clone();
        let password = password.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = LoginForm {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let auth = auth.clone();
            let notify = notify.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();

            loading.set(true);
            spawn_local(async move {
                match auth.login(&form).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => notify.error(err.to_string()),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-container">
            <form class="form-container" {onsubmit}>
                <h1>{"Login"}</h1>
                <FormField
                    name="username"
                    placeholder="Username"
                    value={(*username).clone()}
                    oninput={on_username}
                />
                <FormField
                    name="password"
                    placeholder="Password"
                    kind={FieldKind::Password}
                    value={(*password).clone()}
                    oninput={on_password}
                />
                if *loading {
                    <LoadingSpinner />
                }
                <button class="form-button" type="submit" disabled={*loading}>{"Login"}</button>
            </form>
            <p class="auth-link">
                {"Don't have an account? "}
                <Link<Route> to={Route::Register}>{"Register here"}</Link<Route>>
                {"."}
            </p>
            <p class="auth-link">
                {"Forgot Password? "}
                <Link<Route> to={Route::ForgotPassword}>{"Click here"}</Link<Route>>
                {"."}
            </p>
        </div>
    }
}
