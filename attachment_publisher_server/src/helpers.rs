use log::trace;

use crate::errors::ServerError;

/// Decodes a base64url encoded HTML body. Senders disagree on padding, so trailing `=` are ignored.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected. The amount search only needs the ASCII digits of
/// the receipt to survive, and legacy mail encodings would otherwise be lost entirely.
pub fn decode_base64url_html(encoded: &str) -> Result<String, ServerError> {
    let trimmed = encoded.trim().trim_end_matches('=');
    let bytes = base64::decode_config(trimmed, base64::URL_SAFE_NO_PAD)
        .map_err(|e| ServerError::InvalidRequestBody(format!("body_html is not valid base64url. {e}")))?;
    trace!("💻️ Decoded {} bytes of HTML", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
