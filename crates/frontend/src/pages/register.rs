use crate::app::Route;
use crate::components::{FieldKind, FormField};
use crate::hooks::use_input;
use passage_core::RegistrationForm;
use passage_frontend_common::{LoadingSpinner, use_notify, use_session};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Register)]
pub fn register() -> Html {
    let ctx = use_session();
    let notify = use_notify();
    let navigator = use_navigator();
    let (username, on_username) = use_input();
    let (email, on_email) = use_input();
    let (password, on_password) = use_input();
    let (confirm_password, on_confirm) = use_input();
    let loading = use_state(|| false);

    // Visiting the registration view signs out any current user
    {
        let auth = ctx.auth().clone();
        use_effect_with((), move |_| {
            if let Err(err) = auth.logout() {
                warn!(error = %err, "could not clear session before registration");
            }
        });
    }

    let onsubmit = {
        let auth = ctx.auth().clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = RegistrationForm {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm_password).clone(),
            };
            let auth = auth.clone();
            let notify = notify.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();

            loading.set(true);
            spawn_local(async move {
                match auth.register(&form).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
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
                <h1>{"Register"}</h1>
                <FormField
                    name="username"
                    placeholder="Username"
                    value={(*username).clone()}
                    oninput={on_username}
                />
                <FormField
                    name="email"
                    placeholder="Email"
                    kind={FieldKind::Email}
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <FormField
                    name="password"
                    placeholder="Password"
                    kind={FieldKind::Password}
                    value={(*password).clone()}
                    oninput={on_password}
                />
                <FormField
                    name="confirmPassword"
                    placeholder="Confirm Password"
                    kind={FieldKind::Password}
                    value={(*confirm_password).clone()}
                    oninput={on_confirm}
                />
                if *loading {
                    <LoadingSpinner />
                }
                <button class="form-button" type="submit" disabled={*loading}>{"Register"}</button>
            </form>
            <div class="auth-link">
                {"Already have an account? "}
                <Link<Route> to={Route::Login}>{"Login here"}</Link<Route>>
                {"."}
            </div>
        </div>
    }
}
