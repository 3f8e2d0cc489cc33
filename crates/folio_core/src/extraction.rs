//! Fence stripping for raw model responses.
//!
//! Models frequently wrap JSON payloads in a markdown code fence, with or
//! without a language tag and with or without a newline between the fence
//! and the payload. This module strips that wrapping as an explicit token
//! sequence rather than a single pattern, so each edge case is independently
//! testable.

/// Strips an optional wrapping code fence and surrounding whitespace.
///
/// The opening fence is three backticks optionally followed immediately by a
/// language tag; the closing fence is three backticks at the very end. Either
/// fence may be absent. Input without fences is only trimmed. The operation
/// is idempotent.
///
/// # Examples
///
/// ```
/// use folio_core::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n[1, 2]\n```"), "[1, 2]");
/// assert_eq!(strip_code_fence("  [1, 2]  "), "[1, 2]");
/// ```
pub fn strip_code_fence(input: &str) -> &str {
    let mut payload = input.trim();

    if let Some(rest) = payload.strip_prefix("```") {
        // Language tag runs from the fence to the first non-alphanumeric
        // character; a newline between tag and payload is optional.
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        payload = rest.trim_start();
    }

    if let Some(body) = payload.strip_suffix("```") {
        payload = body.trim_end();
    }

    payload
}
