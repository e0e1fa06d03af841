use crate::components::{FieldKind, FormField};
use crate::hooks::use_input;
use passage_core::ForgotPasswordForm;
use passage_frontend_common::{LoadingSpinner, use_notify, use_session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    let ctx = use_session();
    let notify = use_notify();
    let (email, on_email) = use_input();
    let loading = use_state(|| false);

    let onsubmit = {
        let auth = ctx.auth().clone();
        let email = email.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ForgotPasswordForm {
                email: (*email).clone(),
            };
            let auth = auth.clone();
            let notify = notify.clone();
            let email = email.clone();
            let loading = loading.clone();

            loading.set(true);
            spawn_local(async move {
                match auth.request_password_reset(&form).await {
                    Ok(message) => {
                        notify.success(message);
                        email.set(String::new());
                    }
                    Err(err) => notify.error(err.to_string()),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <form class="form-container" {onsubmit}>
            <h1>{"Forgot Password"}</h1>
            <FormField
                name="email"
                placeholder="Email"
                kind={FieldKind::Email}
                value={(*email).clone()}
                oninput={on_email}
            />
            if *loading {
                <LoadingSpinner />
            }
            <button class="form-button" type="submit" disabled={*loading}>
                {"Send Reset Instructions"}
            </button>
        </form>
    }
}
