//! Auth Commands
//!
//! Frontend bindings for the signup and login API.

use serde::{Deserialize, Serialize};
use super::post_json;

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupArgs {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginArgs {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: String,
}

/// HTTP 200 means success; the message is shown either way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthReply {
    pub ok: bool,
    pub message: String,
}

fn parse_auth_reply(status: u16, body: &str) -> Result<AuthReply, String> {
    let parsed: MessageBody = serde_json::from_str(body).map_err(|e| e.to_string())?;
    Ok(AuthReply { ok: status == 200, message: parsed.message })
}

// ========================
// Commands
// ========================

pub async fn signup(url: &str, csrf_token: Option<&str>, args: &SignupArgs) -> Result<AuthReply, String> {
    let body = serde_json::to_string(args).map_err(|e| e.to_string())?;
    let reply = post_json(url, &body, csrf_token).await?;
    parse_auth_reply(reply.status, &reply.body)
}

pub async fn login(url: &str, csrf_token: Option<&str>, args: &LoginArgs) -> Result<AuthReply, String> {
    let body = serde_json::to_string(args).map_err(|e| e.to_string())?;
    let reply = post_json(url, &body, csrf_token).await?;
    parse_auth_reply(reply.status, &reply.body)
}
