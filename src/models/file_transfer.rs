//! File transfer envelope carried across the messaging boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for moving raw file bytes between a producer and a consumer.
///
/// Pure value carrier: no validation is performed on any field, and
/// `file_stream` is preserved as an exact byte sequence across serialization
/// (JSON renders it as an array of byte values, never as re-encoded text).
/// Envelopes with identical field values compare equal.
///
/// Not wired into the HTTP resource flow; transport wiring lives with the
/// messaging layer that produces and consumes these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileTransfer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_stream: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
}

impl FileTransfer {
    /// Create a fully populated envelope.
    pub fn new(file_name: String, file_stream: Vec<u8>, file_extension: String) -> Self {
        FileTransfer {
            file_name: Some(file_name),
            file_stream: Some(file_stream),
            file_extension: Some(file_extension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_preserves_bytes_exactly() {
        // Bytes that are not valid UTF-8 must survive untouched.
        let payload = vec![0u8, 159, 146, 150, 255, 1];
        let envelope = FileTransfer::new("photo".to_string(), payload.clone(), "jpg".to_string());

        let json = serde_json::to_string(&envelope).unwrap();
        let decoded: FileTransfer = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.file_stream.as_deref(), Some(payload.as_slice()));
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn test_wire_field_names() {
        let envelope = FileTransfer::new("a".to_string(), vec![1, 2], "txt".to_string());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["fileName"], "a");
        assert_eq!(json["fileExtension"], "txt");
        assert_eq!(json["fileStream"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_empty_envelope_populated_field_wise() {
        let mut envelope = FileTransfer::default();
        assert!(envelope.file_name.is_none());
        assert!(envelope.file_stream.is_none());

        envelope.file_stream = Some(Vec::new());
        assert_eq!(envelope.file_stream.as_deref(), Some(&[] as &[u8]));
    }

    #[test]
    fn test_debug_rendering_lists_byte_values() {
        let envelope = FileTransfer::new("f".to_string(), vec![7, 8], "bin".to_string());
        let rendered = format!("{:?}", envelope);
        assert!(rendered.contains("file_name"));
        assert!(rendered.contains("[7, 8]"));
        assert!(rendered.contains("file_extension"));
    }
}
