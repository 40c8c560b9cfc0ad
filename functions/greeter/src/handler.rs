use std::collections::HashMap;

use lambda_runtime::{Context, Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::GreetingError;

/// Identifiers the platform hands us with every invocation, copied out of
/// the runtime [`Context`] so the greeting logic does not depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationMeta {
    pub function_name: String,
    pub function_version: String,
    pub request_id: String,
}

impl From<&Context> for InvocationMeta {
    fn from(ctx: &Context) -> Self {
        InvocationMeta {
            function_name: ctx.env_config.function_name.clone(),
            function_version: ctx.env_config.version.clone(),
            request_id: ctx.request_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingResponse {
    pub status_code: u16,
    pub status_description: String,
    pub is_base64_encoded: bool,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl GreetingResponse {
    fn ok_html(body: String) -> Self {
        let mut headers = HashMap::with_capacity(1);
        headers.insert("Content-Type".to_string(), "text/html".to_string());

        GreetingResponse {
            status_code: 200,
            status_description: "200 OK".to_string(),
            is_base64_encoded: false,
            headers,
            body,
        }
    }
}

pub async fn function_handler(event: LambdaEvent<Value>) -> Result<GreetingResponse, Error> {
    let meta = InvocationMeta::from(&event.context);
    let response = greet(&meta, &event.payload)?;
    Ok(response)
}

/// Logs the invocation, then builds `"<first_name> <last_name>!!"` from the
/// JSON text carried in `event.body`.
pub fn greet(meta: &InvocationMeta, event: &Value) -> Result<GreetingResponse, GreetingError> {
    info!(
        "function = {}, version = {}, request_id = {}",
        meta.function_name, meta.function_version, meta.request_id
    );
    info!("event = {}", event);

    let raw = event
        .get("body")
        .ok_or(GreetingError::MissingField { field: "body" })?;
    let raw = raw.as_str().ok_or_else(|| GreetingError::MalformedInput {
        reason: "body is not a JSON string".to_string(),
    })?;

    let body: Value = serde_json::from_str(raw)?;
    if !body.is_object() {
        return Err(GreetingError::MalformedInput {
            reason: "body is not a JSON object".to_string(),
        });
    }

    let last_name = required_field(&body, "last_name")?;
    let first_name = required_field(&body, "first_name")?;

    Ok(GreetingResponse::ok_html(format!("{} {}!!", first_name, last_name)))
}

// Strings are used verbatim, anything else as its JSON text.
fn required_field(body: &Value, field: &'static str) -> Result<String, GreetingError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(GreetingError::MissingField { field }),
    }
}
