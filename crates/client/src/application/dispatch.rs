//! Routing of a raw service reply to a character or a failure
//!
//! - 400 and 429 are rejections and carry the server message.
//! - Any other non-2xx status is a fetch failure.
//! - A 2xx body with `status == "fail"` is a rejection too.
//! - Everything else must decode as a character sheet.

use serde_json::Value;

use cochar_shared::{CharacterData, FailureBody};

use super::error::{GenerateError, Rejection};
use crate::ports::outbound::RawReply;

/// Statuses the service uses for rejections it explains.
const REJECTION_STATUSES: [u16; 2] = [400, 429];

pub fn route_reply(reply: RawReply) -> Result<CharacterData, GenerateError> {
    if REJECTION_STATUSES.contains(&reply.status) {
        return Err(GenerateError::Rejected(rejection_from(&reply)));
    }

    if !reply.is_success() {
        return Err(GenerateError::Fetch(reply.status_line()));
    }

    let Some(body) = reply.body.as_ref() else {
        return Err(GenerateError::Fetch(format!(
            "{}: response body is not JSON",
            reply.status_line()
        )));
    };

    if FailureBody::is_failure(body) {
        return Err(GenerateError::Rejected(rejection_from(&reply)));
    }

    serde_json::from_value::<CharacterData>(body.clone())
        .map_err(|e| GenerateError::Fetch(format!("unexpected response shape: {e}")))
}

fn rejection_from(reply: &RawReply) -> Rejection {
    let failure = reply.body.as_ref().and_then(FailureBody::from_value);
    match failure {
        Some(failure) => Rejection {
            status: reply.status,
            origin: failure.origin,
            message: failure.message.to_string(),
        },
        None => Rejection {
            status: reply.status,
            origin: reply
                .body
                .as_ref()
                .and_then(|b| b.get("origin"))
                .and_then(Value::as_str)
                .map(str::to_string),
            message: reply.status_line(),
        },
    }
}
