use crate::view_state::ViewState;
use serde::{Deserialize, Serialize};

/// Multipart field carrying the pasted image bytes.
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the image caption.
pub const CAPTION_FIELD: &str = "caption";

/// Body returned by the delete endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeleteResponse {
    pub success: bool,
    /// Fresh view state after the deletion. Servers that only report
    /// `success` leave this out and the page is reloaded instead.
    #[serde(default)]
    pub state: Option<ViewState>,
}

#[cfg(test)]
impl DeleteResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            state: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            state: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_legacy_delete_response() {
        let resp: DeleteResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(resp, DeleteResponse::ok());
    }

    #[test]
    fn test_parse_delete_response_with_state() {
        let resp: DeleteResponse = serde_json::from_str(
            r#"{"success": true, "state": {"gallery": [{"filename": "b.png"}]}}"#,
        )
        .unwrap();

        assert!(resp.success);
        let state = resp.state.unwrap();
        assert_eq!(state.gallery.len(), 1);
        assert_eq!(state.gallery[0].filename, "b.png");
        assert_eq!(state.gallery[0].caption, "");
    }

    #[test]
    fn test_missing_success_is_an_error() {
        assert!(serde_json::from_str::<DeleteResponse>("{}").is_err());
    }
}
