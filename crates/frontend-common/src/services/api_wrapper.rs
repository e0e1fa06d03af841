//! API wrapper utilities for handling session expiry

use crate::auth::error_handler::trigger_session_expired;
use passage_http::FlowError;
use std::future::Future;

/// Hand an unrecoverable session to the global handler
pub fn handle_flow_error(error: &FlowError) {
    if error.is_session_expired() {
        trigger_session_expired();
    }
}

/// Wrapper for authenticated flows that reports session expiry
pub async fn with_session_handling<T, F>(flow: F) -> Result<T, FlowError>
where
    F: Future<Output = Result<T, FlowError>>,
{
    match flow.await {
        Ok(result) => Ok(result),
        Err(error) => {
            handle_flow_error(&error);
            Err(error)
        }
    }
}
