//! Session context and provider

use crate::client::{SessionServices, api_config};
use passage_core::{ApiConfig, SessionManager};
use passage_http::{AuthApiService, ProfileApiService, PublicClient};
use std::rc::Rc;
use tracing::error;
use yew::prelude::*;

/// Shared handle to the app's services
#[derive(Clone)]
pub struct SessionContext {
    services: Rc<SessionServices>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.services, &other.services)
    }
}

impl SessionContext {
    pub fn new(services: SessionServices) -> Self {
        Self {
            services: Rc::new(services),
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.services.session
    }

    /// Client for unauthenticated calls; also the guard's refresher
    pub fn public(&self) -> &PublicClient {
        &self.services.public
    }

    pub fn auth(&self) -> &AuthApiService {
        &self.services.auth
    }

    pub fn profile(&self) -> &ProfileApiService {
        &self.services.profile
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    /// Overrides the resolved API base address
    #[prop_or_default]
    pub base_url: Option<AttrValue>,
    pub children: Children,
}

/// Builds the services once and provides them to the subtree
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let base_url = props.base_url.clone();
    let context = use_memo((), move |_| {
        let config = base_url.map_or_else(api_config, |url| ApiConfig::new(url.to_string()));
        SessionServices::new(&config)
            .map(SessionContext::new)
            .map_err(|err| {
                error!(error = %err, "failed to initialise API client");
                err.to_string()
            })
    });

    match &*context {
        Ok(context) => html! {
            <ContextProvider<SessionContext> context={context.clone()}>
                {props.children.clone()}
            </ContextProvider<SessionContext>>
        },
        Err(message) => html! {
            <div class="p-4 text-red-700">
                {format!("Could not start the application: {message}")}
            </div>
        },
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}
