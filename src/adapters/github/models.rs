//! GitHub Issues API request models.
//!
//! These structs map to the GitHub REST API v3 JSON request bodies.
//! They are used internally by the GitHub adapter and are not part of
//! the public domain model.

use serde::{Deserialize, Serialize};

/// Request body for adding assignees to an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddAssigneesRequest {
    /// Login names to assign.
    pub assignees: Vec<String>,
}

/// Request body for posting a comment on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    /// The comment body (plain text or Markdown).
    pub body: String,
}

/// Request body for adding labels to an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLabelsRequest {
    /// Label names to apply. Labels already on the issue are kept.
    pub labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assignees_request_serialization() {
        let req = AddAssigneesRequest {
            assignees: vec!["acheong08".to_string()],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"assignees":["acheong08"]}"#);
    }

    #[test]
    fn test_comment_request_serialization() {
        let req = CommentRequest {
            body: "Thanks for reporting!".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("body"));
        assert!(json.contains("Thanks for reporting!"));
    }

    #[test]
    fn test_add_labels_request_serialization() {
        let req = AddLabelsRequest {
            labels: vec!["bug".to_string(), "triage-needed".to_string()],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"labels":["bug","triage-needed"]}"#);
    }

    #[test]
    fn test_comment_request_round_trips_unicode() {
        let req = CommentRequest {
            body: "👋 Thanks for reporting!".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: CommentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.body, req.body);
    }
}
