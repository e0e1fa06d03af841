use crate::app::Route;
use crate::components::PasswordDialog;
use chrono::{DateTime, Local, Utc};
use passage_frontend_common::services::with_session_handling;
use passage_frontend_common::{LoadingSpinner, use_session};
use passage_http::types::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Calendar date in the browser's time zone
fn local_date(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%-m/%-d/%Y")
        .to_string()
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let ctx = use_session();
    let navigator = use_navigator();
    let profile = use_state(|| None::<UserProfile>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let show_dialog = use_state(|| false);

    {
        let service = ctx.profile().clone();
        let profile = profile.clone();
        let error = error.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match with_session_handling(service.load_profile()).await {
                    Ok(loaded) => {
                        profile.set(Some(loaded));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        });
    }

    if *loading {
        return html! { <LoadingSpinner /> };
    }
    if let Some(error) = &*error {
        return html! { <div class="error">{error.clone()}</div> };
    }
    let Some(user) = &*profile else {
        return html! {};
    };

    let open_dialog = {
        let show_dialog = show_dialog.clone();
        Callback::from(move |_: MouseEvent| show_dialog.set(true))
    };
    let close_dialog = {
        let show_dialog = show_dialog.clone();
        Callback::from(move |()| show_dialog.set(false))
    };
    let go_back = navigator.map(|navigator| {
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Home))
    });

    html! {
        <div class="container">
            <h1 class="heading">{"Profile"}</h1>
            <div>
                <div class="info-section">
                    <label class="label">{"Username"}</label>
                    <p class="value">{user.username.clone()}</p>
                </div>
                <div class="info-section">
                    <label class="label">{"Email"}</label>
                    <p class="value">{user.email.clone()}</p>
                </div>
                <div class="info-section">
                    <label class="label">{"Member Since"}</label>
                    <p class="value">{local_date(&user.date_joined)}</p>
                </div>
                <div class="info-section">
                    <label class="label">{"Last Updated"}</label>
                    <p class="value">{local_date(&user.last_updated)}</p>
                </div>
                <button class="change-password-button" onclick={open_dialog}>
                    {"Change Password"}
                </button>
            </div>
            <button class="go-back-button" onclick={go_back}>{"Go Back"}</button>
            if *show_dialog {
                <PasswordDialog on_close={close_dialog} />
            }
        </div>
    }
}
