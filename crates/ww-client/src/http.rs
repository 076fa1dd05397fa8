use crate::{ClientError, ClientResult};

use log::debug;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Sends `req` and decodes a JSON body, turning non-2xx responses into
/// [`ClientError::Api`].
///
/// Error bodies are `{"error": {"code", "message"}}`. Firebase puts a numeric
/// HTTP code in `code` and its error code at the start of `message`
/// (`"WEAK_PASSWORD : Password should be ..."`), so a non-string `code`
/// falls back to the first token of `message`.
pub(crate) async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> ClientResult<T> {
    let response = req.send().await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        debug!("Request failed with HTTP {status}");
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        let error = body.get("error");

        let message = error
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        let code = error
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| leading_code(&message));

        return Err(ClientError::api_error(status, code, message));
    }

    Ok(serde_json::from_str(&text)?)
}

/// `"WEAK_PASSWORD : Password should be at least 6 characters"` -> `"WEAK_PASSWORD"`
pub(crate) fn leading_code(message: &str) -> String {
    message
        .split([' ', ':'])
        .next()
        .unwrap_or_default()
        .to_string()
}
