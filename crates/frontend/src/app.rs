use crate::auth_guard::RequireAuth;
use crate::components::Navbar;
use crate::pages::{ForgotPassword, Home, Login, Logout, Profile, Register, ResetPassword};
use passage_frontend_common::auth::error_handler::{
    clear_session_expired_callback, set_session_expired_callback,
};
use passage_frontend_common::{NotificationProvider, SessionProvider, use_notify};
use passage_http::services::SESSION_EXPIRED_MESSAGE;
use std::rc::Rc;
use tracing::info;
use yew::html::ChildrenProps;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/profile")]
    Profile,
    #[at("/login")]
    Login,
    #[at("/logout")]
    Logout,
    #[at("/register")]
    Register,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password/:uidb64/:token")]
    ResetPassword { uidb64: String, token: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <RequireAuth>
                <Navbar />
                <Home />
            </RequireAuth>
        },
        Route::Profile => html! {
            <RequireAuth>
                <Navbar />
                <Profile />
            </RequireAuth>
        },
        Route::Login => html! { <Login /> },
        Route::Logout => html! { <Logout /> },
        Route::Register => html! { <Register /> },
        Route::ForgotPassword => html! { <ForgotPassword /> },
        Route::ResetPassword { uidb64, token } => html! {
            <ResetPassword {uidb64} {token} />
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <NotificationProvider>
                    <SessionExpiryRedirect>
                        <Switch<Route> render={switch} />
                    </SessionExpiryRedirect>
                </NotificationProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}

/// Sends the user to the login view when a flow reports an expired session
#[function_component(SessionExpiryRedirect)]
fn session_expiry_redirect(props: &ChildrenProps) -> Html {
    let navigator = use_navigator();
    let notify = use_notify();

    use_effect_with((), move |_| {
        if let Some(navigator) = navigator {
            set_session_expired_callback(Rc::new(move || {
                info!("session expired, redirecting to login");
                notify.error(SESSION_EXPIRED_MESSAGE);
                navigator.push(&Route::Login);
            }));
        }
        clear_session_expired_callback
    });

    html! { <>{ props.children.clone() }</> }
}
