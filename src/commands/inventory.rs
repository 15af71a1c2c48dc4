//! Inventory Commands
//!
//! The table's single CRUD endpoint: the page's own URL.

use super::post_json;
use crate::error::MutationError;
use crate::table::mutation::{parse_response, Mutation, MutationResponse};

/// Send one mutation and classify the reply
pub async fn submit_mutation(
    endpoint: &str,
    csrf_token: Option<&str>,
    mutation: &Mutation,
) -> Result<MutationResponse, MutationError> {
    let body = mutation.to_body()?;
    log::debug!("[MUTATION] POST {} {}", endpoint, body);
    let reply = post_json(endpoint, &body, csrf_token)
        .await
        .map_err(MutationError::Transport)?;
    log::debug!("[MUTATION] {} -> {}", reply.status, reply.body);
    parse_response(&reply.body)
}
