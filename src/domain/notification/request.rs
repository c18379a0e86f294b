//! Notification request value object

use serde::Deserialize;

use crate::domain::error::RequestError;

use super::icon::{decode_icon, NotificationIcon};

/// Wire shape of a notification request body.
/// Unknown fields are ignored; `null` behaves like an absent field.
#[derive(Debug, Default, Deserialize)]
struct NotificationPayload {
    title: Option<String>,
    message: Option<String>,
    icon: Option<String>,
}

/// A validated notification request.
///
/// Title and message are always non-empty; the only way to build one is
/// through [`NotificationRequest::new`] or [`NotificationRequest::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    title: String,
    message: String,
    icon: Option<String>,
    icon_bytes: Option<Vec<u8>>,
}

impl NotificationRequest {
    /// Create a request from title and message
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, RequestError> {
        let title = title.into();
        let message = message.into();

        if title.is_empty() || message.is_empty() {
            return Err(RequestError::MissingField);
        }

        Ok(Self {
            title,
            message,
            icon: None,
            icon_bytes: None,
        })
    }

    /// Attach an icon, decoding it if it is a base64 payload
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        let icon = icon.into();
        if icon.is_empty() {
            self.icon = None;
            self.icon_bytes = None;
        } else {
            self.icon_bytes = decode_icon(&icon);
            self.icon = Some(icon);
        }
        self
    }

    /// Parse and validate a raw JSON request body
    pub fn parse(body: &[u8]) -> Result<Self, RequestError> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| RequestError::MalformedPayload(e.to_string()))?;

        // serde would otherwise accept a positional array for a struct
        let serde_json::Value::Object(fields) = value else {
            return Err(RequestError::MalformedPayload(
                "expected a JSON object".to_string(),
            ));
        };

        let payload: NotificationPayload = serde_json::from_value(fold_field_names(fields))
            .map_err(|e| RequestError::MalformedPayload(e.to_string()))?;

        let request = Self::new(
            payload.title.unwrap_or_default(),
            payload.message.unwrap_or_default(),
        )?;

        Ok(match payload.icon {
            Some(icon) => request.with_icon(icon),
            None => request,
        })
    }

    /// Notification title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Notification body
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Icon text exactly as supplied by the caller
    pub fn icon_text(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Decoded icon bytes, present only when the icon was valid base64
    pub fn icon_bytes(&self) -> Option<&[u8]> {
        self.icon_bytes.as_deref()
    }

    /// Resolve the icon to hand to a notifier.
    ///
    /// Decoded bytes win. Undecodable text is dropped unless `passthrough`
    /// is set, in which case it is forwarded as an icon name or path.
    pub fn icon(&self, passthrough: bool) -> Option<NotificationIcon> {
        match (&self.icon_bytes, &self.icon) {
            (Some(bytes), _) => Some(NotificationIcon::Bytes(bytes.clone())),
            (None, Some(text)) if passthrough => Some(NotificationIcon::Named(text.clone())),
            _ => None,
        }
    }
}

const FIELD_NAMES: [&str; 3] = ["title", "message", "icon"];

/// Match field names case-insensitively (`Title`, `MESSAGE`).
/// A key spelled exactly like the field wins over other casings.
fn fold_field_names(fields: serde_json::Map<String, serde_json::Value>) -> serde_json::Value {
    let mut folded = serde_json::Map::with_capacity(fields.len());

    for (key, value) in fields {
        let lower = key.to_ascii_lowercase();
        if !FIELD_NAMES.contains(&lower.as_str()) {
            folded.insert(key, value);
        } else if key == lower || !folded.contains_key(&lower) {
            folded.insert(lower, value);
        }
    }

    serde_json::Value::Object(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_request() {
        let request = NotificationRequest::parse(br#"{"title":"Build","message":"done"}"#).unwrap();
        assert_eq!(request.title(), "Build");
        assert_eq!(request.message(), "done");
        assert!(request.icon_text().is_none());
        assert!(request.icon_bytes().is_none());
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let request =
            NotificationRequest::parse(br#"{"title":"a","message":"b","priority":2}"#).unwrap();
        assert_eq!(request.title(), "a");
    }

    #[test]
    fn parse_matches_field_names_case_insensitively() {
        let request =
            NotificationRequest::parse(br#"{"Title":"a","MESSAGE":"b","Icon":"AQID"}"#).unwrap();
        assert_eq!(request.title(), "a");
        assert_eq!(request.message(), "b");
        assert_eq!(request.icon_bytes(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn exact_field_name_wins_over_other_casing() {
        let request =
            NotificationRequest::parse(br#"{"title":"exact","Title":"folded","message":"b"}"#)
                .unwrap();
        assert_eq!(request.title(), "exact");

        let request =
            NotificationRequest::parse(br#"{"Title":"folded","title":"exact","message":"b"}"#)
                .unwrap();
        assert_eq!(request.title(), "exact");
    }

    #[test]
    fn parse_missing_title() {
        let err = NotificationRequest::parse(br#"{"message":"b"}"#).unwrap_err();
        assert_eq!(err, RequestError::MissingField);
    }

    #[test]
    fn parse_empty_message() {
        let err = NotificationRequest::parse(br#"{"title":"a","message":""}"#).unwrap_err();
        assert_eq!(err, RequestError::MissingField);
    }

    #[test]
    fn parse_null_title_is_missing() {
        let err = NotificationRequest::parse(br#"{"title":null,"message":"b"}"#).unwrap_err();
        assert_eq!(err, RequestError::MissingField);
    }

    #[test]
    fn parse_truncated_json() {
        let err = NotificationRequest::parse(br#"{"title":"a""#).unwrap_err();
        assert!(matches!(err, RequestError::MalformedPayload(_)));
        assert!(err.to_string().starts_with("invalid request payload: "));
    }

    #[test]
    fn parse_non_object() {
        let err = NotificationRequest::parse(br#"["a","b","c"]"#).unwrap_err();
        assert_eq!(
            err,
            RequestError::MalformedPayload("expected a JSON object".to_string())
        );

        let err = NotificationRequest::parse(b"\"hello\"").unwrap_err();
        assert!(matches!(err, RequestError::MalformedPayload(_)));
    }

    #[test]
    fn parse_wrong_field_type() {
        let err = NotificationRequest::parse(br#"{"title":1,"message":"b"}"#).unwrap_err();
        assert!(matches!(err, RequestError::MalformedPayload(_)));
    }

    #[test]
    fn parse_empty_body() {
        let err = NotificationRequest::parse(b"").unwrap_err();
        assert!(matches!(err, RequestError::MalformedPayload(_)));
    }

    #[test]
    fn base64_icon_is_decoded() {
        let request =
            NotificationRequest::parse(br#"{"title":"a","message":"b","icon":"AQID"}"#).unwrap();
        assert_eq!(request.icon_bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(request.icon(false), Some(NotificationIcon::Bytes(vec![1, 2, 3])));
    }

    #[test]
    fn invalid_icon_is_dropped() {
        let request = NotificationRequest::parse(
            br#"{"title":"a","message":"b","icon":"dialog-warning"}"#,
        )
        .unwrap();
        assert!(request.icon_bytes().is_none());
        assert_eq!(request.icon_text(), Some("dialog-warning"));
        assert_eq!(request.icon(false), None);
    }

    #[test]
    fn invalid_icon_passes_through_when_enabled() {
        let request = NotificationRequest::new("a", "b")
            .unwrap()
            .with_icon("dialog-warning");
        assert_eq!(
            request.icon(true),
            Some(NotificationIcon::Named("dialog-warning".to_string()))
        );
    }

    #[test]
    fn empty_icon_is_absent() {
        let request =
            NotificationRequest::parse(br#"{"title":"a","message":"b","icon":""}"#).unwrap();
        assert!(request.icon_text().is_none());
        assert_eq!(request.icon(true), None);
    }
}
