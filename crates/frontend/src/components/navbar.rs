use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Top navigation for the protected views
#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
            <Link<Route> to={Route::Profile} classes="nav-link">{"Profile"}</Link<Route>>
            <Link<Route> to={Route::Logout} classes="logout-button">{"Logout"}</Link<Route>>
        </nav>
    }
}
