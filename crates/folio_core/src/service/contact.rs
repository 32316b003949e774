//! Contact form and clipboard helpers.
//!
//! # Invariants
//! - Mailto components use `encodeURIComponent` escaping.
//! - Clipboard failures are reported to the caller, never panicked on.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Subject prefix of messages composed from the contact form.
pub const MAIL_SUBJECT_PREFIX: &str = "Portfolio Contact — ";
/// Toast shown after the contact address was copied.
pub const EMAIL_COPIED_MESSAGE: &str = "Email copied to clipboard";

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(char::from(byte)),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}

/// Builds the `mailto:` URL the contact form navigates to.
pub fn compose_mailto(to: &str, name: &str, email: &str, message: &str) -> String {
    let subject = encode_uri_component(&format!("{MAIL_SUBJECT_PREFIX}{name}"));
    format!(
        "mailto:{to}?subject={subject}&body={body}%0A%0AFrom: {name} <{email}>",
        body = encode_uri_component(message),
        name = encode_uri_component(name),
        email = encode_uri_component(email),
    )
}

/// Clipboard write failure (permission denied, API missing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError(pub String);

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "clipboard write failed: {}", self.0)
    }
}

impl Error for ClipboardError {}

/// Host clipboard capability.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that keeps the last written text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard for hosts without clipboard access; every write fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("clipboard API unavailable".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{compose_mailto, encode_uri_component};

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("it's (ok)!*~"), "it's%20(ok)!*~");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
    }

    #[test]
    fn mailto_includes_subject_body_and_sender() {
        let url = compose_mailto("me@example.com", "Ada L", "ada@x.io", "Hi there");
        assert_eq!(
            url,
            "mailto:me@example.com?subject=Portfolio%20Contact%20%E2%80%94%20Ada%20L&body=Hi%20there%0A%0AFrom: Ada%20L <ada%40x.io>"
        );
    }
}
