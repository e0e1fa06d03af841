use crate::app::Route;
use passage_frontend_common::use_session;
use tracing::warn;
use yew::prelude::*;
use yew_router::prelude::*;

/// Clears the session, then goes to the login view
#[function_component(Logout)]
pub fn logout() -> Html {
    let ctx = use_session();

    // Cleared during render, before the redirect lands
    if let Err(err) = ctx.auth().logout() {
        warn!(error = %err, "could not clear session on logout");
    }

    html! { <Redirect<Route> to={Route::Login} /> }
}
