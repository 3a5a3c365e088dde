//! Messages sent from the embedded surface to the host.
//!
//! The generated document only ever emits two payloads:
//!
//! ```text
//! {"type":"HEIGHT","height":412}
//! {"type":"CLICK","id":"2"}
//! ```
//!
//! Anything else, including unknown `type` values and malformed JSON,
//! decodes to `None` and is dropped by the host.

use serde::Deserialize;

/// A decoded message from the embedded surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum InboundMessage {
    /// Measured content height in CSS pixels
    Height { height: f64 },
    /// Text of the section with this correlation id was tapped
    Click { id: String },
}

impl InboundMessage {
    /// Decode a raw payload from the surface.
    pub fn decode(payload: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(payload) {
            Ok(Self::Height { height }) if !height.is_finite() => None,
            Ok(msg) => Some(msg),
            Err(err) => {
                tracing::debug!(%err, payload, "dropping undecodable surface message");
                None
            }
        }
    }

    /// Short human-readable description for logs.
    pub fn summary(&self) -> String {
        match self {
            Self::Height { height } => format!("HEIGHT {height}"),
            Self::Click { id } => format!("CLICK #{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_height() {
        let msg = InboundMessage::decode(r#"{"type":"HEIGHT","height":300}"#).unwrap();
        assert_eq!(msg, InboundMessage::Height { height: 300.0 });
    }

    #[test]
    fn test_decode_fractional_height() {
        let msg = InboundMessage::decode(r#"{"type":"HEIGHT","height":412.5}"#).unwrap();
        assert_eq!(msg, InboundMessage::Height { height: 412.5 });
    }

    #[test]
    fn test_decode_click() {
        let msg = InboundMessage::decode(r#"{"type":"CLICK","id":"x"}"#).unwrap();
        assert_eq!(msg, InboundMessage::Click { id: "x".to_string() });
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let msg = InboundMessage::decode(r#"{"type":"CLICK","id":"1","ts":5}"#);
        assert!(msg.is_some());
    }

    #[test]
    fn test_decode_unknown_type() {
        assert!(InboundMessage::decode(r#"{"type":"SCROLL","y":10}"#).is_none());
        assert!(InboundMessage::decode(r#"{"type":"height","height":1}"#).is_none());
    }

    #[test]
    fn test_decode_malformed() {
        assert!(InboundMessage::decode("not json").is_none());
        assert!(InboundMessage::decode("").is_none());
        assert!(InboundMessage::decode(r#"{"height":1}"#).is_none());
        assert!(InboundMessage::decode(r#"{"type":"HEIGHT"}"#).is_none());
        assert!(InboundMessage::decode(r#"{"type":"HEIGHT","height":"tall"}"#).is_none());
        assert!(InboundMessage::decode(r#"{"type":"CLICK"}"#).is_none());
    }

    #[test]
    fn test_summary() {
        assert_eq!(InboundMessage::Height { height: 300.0 }.summary(), "HEIGHT 300");
        assert_eq!(
            InboundMessage::Click { id: "2".to_string() }.summary(),
            "CLICK #2"
        );
    }
}
