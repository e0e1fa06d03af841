//! Change-password dialog

use crate::components::{FieldKind, FormField};
use crate::hooks::{FlowStatus, use_input};
use gloo::timers::callback::Timeout;
use passage_core::{PasswordChangeForm, UiTimings};
use passage_frontend_common::services::with_session_handling;
use passage_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordDialogProps {
    pub on_close: Callback<()>,
}

/// Modal form for changing the signed-in user's password
///
/// Closes itself a short while after a successful change; stays open on
/// failure so the user can correct the input.
#[function_component(PasswordDialog)]
pub fn password_dialog(props: &PasswordDialogProps) -> Html {
    let ctx = use_session();
    let (old_password, on_old) = use_input();
    let (new_password, on_new) = use_input();
    let (confirm_password, on_confirm) = use_input();
    let status = use_state(FlowStatus::default);

    let onsubmit = {
        let profile = ctx.profile().clone();
        let old_password = old_password.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let status = status.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }

            let form = PasswordChangeForm {
                old_password: (*old_password).clone(),
                new_password: (*new_password).clone(),
                confirm_password: (*confirm_password).clone(),
            };
            let profile = profile.clone();
            let old_password = old_password.clone();
            let new_password = new_password.clone();
            let confirm_password = confirm_password.clone();
            let status = status.clone();
            let on_close = on_close.clone();

            status.set(FlowStatus::Submitting);
            spawn_local(async move {
                match with_session_handling(profile.change_password(&form)).await {
                    Ok(message) => {
                        status.set(FlowStatus::Succeeded(message.to_owned()));
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                        Timeout::new(UiTimings::PASSWORD_DIALOG_CLOSE_MS, move || {
                            on_close.emit(());
                        })
                        .forget();
                    }
                    Err(err) => status.set(FlowStatus::Failed(err.to_string())),
                }
            });
        })
    };

    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="password-dialog-overlay">
            <div class="password-dialog" role="dialog">
                <h2>{"Change Password"}</h2>
                <form {onsubmit}>
                    <FormField
                        name="old_password"
                        label="Current Password"
                        kind={FieldKind::Password}
                        value={(*old_password).clone()}
                        oninput={on_old}
                    />
                    <FormField
                        name="new_password"
                        label="New Password"
                        kind={FieldKind::Password}
                        value={(*new_password).clone()}
                        oninput={on_new}
                    />
                    <FormField
                        name="confirm_password"
                        label="Confirm New Password"
                        kind={FieldKind::Password}
                        value={(*confirm_password).clone()}
                        oninput={on_confirm}
                    />
                    if let Some(error) = status.error() {
                        <div class="error-message">{error.to_owned()}</div>
                    }
                    if let Some(success) = status.success() {
                        <div class="success-message">{success.to_owned()}</div>
                    }
                    <div class="dialog-buttons">
                        <button type="button" class="cancel-button" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="submit-button"
                            disabled={status.is_submitting()}
                        >
                            { if status.is_submitting() { "Changing..." } else { "Change Password" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
