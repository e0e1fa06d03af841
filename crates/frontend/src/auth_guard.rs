//! Authentication guard component for protected routes

use crate::app::Route;
use passage_core::{GuardState, SessionGuard, SystemClock};
use passage_frontend_common::{LoadingSpinner, use_session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only once the stored session checks out
///
/// The check runs once per mount. An expired access credential is refreshed
/// first; anything else clears the session and redirects to login.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let ctx = use_session();
    let state = use_state(|| GuardState::Checking);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let mut guard = SessionGuard::new(ctx.session().clone(), SystemClock);
            guard.begin();
            let refresher = ctx.public().clone();
            spawn_local(async move {
                guard
                    .evaluate_observed(&refresher, |next| state.set(next))
                    .await;
            });
        });
    }

    match *state {
        GuardState::Authorized => html! { <>{ props.children.clone() }</> },
        GuardState::Unauthorized => html! { <Redirect<Route> to={Route::Login} /> },
        GuardState::Unknown | GuardState::Checking => html! {
            <LoadingSpinner text={"Checking your session..."} />
        },
        GuardState::Refreshing => html! {
            <LoadingSpinner text={"Refreshing your session..."} />
        },
    }
}
