use passage_frontend_common::services::with_session_handling;
use passage_frontend_common::{LoadingSpinner, use_session};
use passage_http::types::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let ctx = use_session();
    let user = use_state(|| None::<UserProfile>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let profile = ctx.profile().clone();
        let user = user.clone();
        let error = error.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match with_session_handling(profile.load_profile()).await {
                    Ok(profile) => {
                        user.set(Some(profile));
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

    html! {
        <div class="home-container">
            <h1 class="welcome-text">
                {format!(
                    "Welcome back, {}!",
                    user.as_ref().map(|u| u.username.as_str()).unwrap_or_default()
                )}
            </h1>
            if let Some(error) = &*error {
                <div class="error">{error.clone()}</div>
            }
        </div>
    }
}
