//! Turns the backend's `{ "success": bool, ... }` bodies into `Result`s.

use crate::core::models::Payload;
use crate::error::GatewayError;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Successful agent reply: the typed payload plus who produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReply<T> {
    /// Single agent that handled the call, when the backend names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    /// Agents chained to produce the payload, in call order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agents_involved: Vec<String>,
    pub data: T,
}

impl<T> AgentReply<T> {
    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AgentReply<U> {
        AgentReply {
            agent: self.agent,
            agents_involved: self.agents_involved,
            data: f(self.data),
        }
    }
}

/// Check the `success` discriminant and hand back the body as an object.
///
/// A missing or `false` flag is a rejection; the reason comes from the first
/// of `error`, `detail` or `message` the backend supplied.
pub(crate) fn accept(endpoint: &str, body: Value) -> Result<Map<String, Value>, GatewayError> {
    let Value::Object(map) = body else {
        return Err(schema_error(endpoint, "expected a JSON object"));
    };

    if map.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(map);
    }

    let reason = ["error", "detail", "message"]
        .iter()
        .find_map(|key| map.get(*key))
        .map_or_else(
            || "backend reported success=false without a reason".to_string(),
            |value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        );

    Err(GatewayError::Rejected {
        endpoint: endpoint.to_string(),
        reason: super::scrub::sanitize_detail(&reason),
    })
}

/// Decode a `{success, agent?, agents_involved?, data}` body.
pub(crate) fn decode_reply<T: Payload>(
    endpoint: &str,
    body: Value,
) -> Result<AgentReply<T>, GatewayError> {
    let mut map = accept(endpoint, body)?;

    let data = map
        .remove("data")
        .ok_or_else(|| schema_error(endpoint, "missing field `data`"))?;
    let data = decode_payload::<T>(endpoint, data)?;

    let agent = map
        .get("agent")
        .and_then(Value::as_str)
        .map(ToString::to_string);
    let agents_involved = match map.remove("agents_involved") {
        Some(value) => {
            serde_json::from_value(value).map_err(|source| GatewayError::Schema {
                endpoint: endpoint.to_string(),
                source,
            })?
        }
        None => Vec::new(),
    };

    Ok(AgentReply {
        agent,
        agents_involved,
        data,
    })
}

/// Decode a body whose payload sits at the top level next to `success`.
pub(crate) fn decode_flat<T: Payload>(endpoint: &str, body: Value) -> Result<T, GatewayError> {
    let map = accept(endpoint, body)?;
    decode_payload(endpoint, Value::Object(map))
}

/// Decode and range-check a payload that is not wrapped in an envelope.
pub(crate) fn decode_payload<T: Payload>(endpoint: &str, value: Value) -> Result<T, GatewayError> {
    let payload: T = serde_json::from_value(value).map_err(|source| GatewayError::Schema {
        endpoint: endpoint.to_string(),
        source,
    })?;
    payload
        .check()
        .map_err(|reason| schema_error(endpoint, &reason))?;
    Ok(payload)
}

fn schema_error(endpoint: &str, reason: &str) -> GatewayError {
    GatewayError::Schema {
        endpoint: endpoint.to_string(),
        source: serde_json::Error::custom(reason),
    }
}
