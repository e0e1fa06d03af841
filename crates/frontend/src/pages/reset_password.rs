use crate::app::Route;
use crate::components::{FieldKind, FormField};
use crate::hooks::{FlowStatus, use_input};
use gloo::timers::callback::Timeout;
use passage_core::{ResetPasswordForm, UiTimings};
use passage_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResetPasswordProps {
    /// Opaque user reference from the emailed link
    pub uidb64: AttrValue,
    /// Opaque reset token from the emailed link
    pub token: AttrValue,
}

#[function_component(ResetPassword)]
pub fn reset_password(props: &ResetPasswordProps) -> Html {
    let ctx = use_session();
    let navigator = use_navigator();
    let (password, on_password) = use_input();
    let status = use_state(FlowStatus::default);

    let onsubmit = {
        let auth = ctx.auth().clone();
        let password = password.clone();
        let status = status.clone();
        let navigator = navigator.clone();
        let uidb64 = props.uidb64.clone();
        let token = props.token.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ResetPasswordForm {
                uidb64: uidb64.to_string(),
                token: token.to_string(),
                password: (*password).clone(),
            };
            let auth = auth.clone();
            let status = status.clone();
            let navigator = navigator.clone();

            status.set(FlowStatus::Submitting);
            spawn_local(async move {
                match auth.reset_password(&form).await {
                    Ok(message) => {
                        status.set(FlowStatus::Succeeded(message));
                        if let Some(navigator) = navigator {
                            Timeout::new(UiTimings::RESET_REDIRECT_DELAY_MS, move || {
                                navigator.push(&Route::Login);
                            })
                            .forget();
                        }
                    }
                    Err(err) => status.set(FlowStatus::Failed(err.to_string())),
                }
            });
        })
    };

    let to_login = navigator.map(|navigator| {
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Login))
    });

    html! {
        <div class="reset-password-container">
            <h2>{"Reset Password"}</h2>
            <form {onsubmit}>
                <FormField
                    name="password"
                    label="New Password"
                    kind={FieldKind::Password}
                    value={(*password).clone()}
                    oninput={on_password}
                />
                <button type="submit" disabled={status.is_submitting()}>{"Reset Password"}</button>
            </form>
            if let Some(success) = status.success() {
                <div class="success-message">{success.to_owned()}</div>
            }
            if let Some(error) = status.error() {
                <div class="error-message">{error.to_owned()}</div>
            }
            <p>
                {"Remember your password? "}
                <button type="button" onclick={to_login}>{"Login"}</button>
            </p>
        </div>
    }
}
