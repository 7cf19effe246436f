//! Request and response types for search index operations.

use serde::{Deserialize, Serialize};

use catalog_indexer_shared::WellnessRecord;

/// Acknowledgement returned by the search service for a write.
///
/// Writes are applied asynchronously by the service; `task_id` identifies the
/// pending indexing task. The catalog indexer does not wait on it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskResponse {
    /// Identifier of the indexing task created by the write.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// Object IDs written by a batch. Empty for settings updates.
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Vec<String>,
}

/// Summary of a single batch write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOperationSummary {
    /// Number of records submitted.
    pub total: usize,
    /// Task created by the write, `None` if nothing was sent.
    pub task_id: Option<u64>,
    /// Object IDs acknowledged by the service.
    pub object_ids: Vec<String>,
}

impl BatchOperationSummary {
    /// Summary for a batch that was skipped because it was empty.
    pub fn empty() -> Self {
        Self {
            total: 0,
            task_id: None,
            object_ids: Vec::new(),
        }
    }
}

/// Body of a multi-record batch write.
#[derive(Debug, Serialize)]
pub(crate) struct BatchWriteRequest<'a> {
    pub requests: Vec<BatchOperation<'a>>,
}

/// One create-or-replace operation inside a batch write.
#[derive(Debug, Serialize)]
pub(crate) struct BatchOperation<'a> {
    pub action: &'static str,
    pub body: &'a WellnessRecord,
}

impl<'a> BatchWriteRequest<'a> {
    /// Wrap every record in an `updateObject` action, which replaces any
    /// existing record with the same `objectID`.
    pub fn update_objects(records: &'a [WellnessRecord]) -> Self {
        Self {
            requests: records
                .iter()
                .map(|body| BatchOperation {
                    action: "updateObject",
                    body,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_response_from_batch_reply() {
        let reply = r#"{"taskID": 792, "objectIDs": ["38e2366d8892", "57a5627e5114"]}"#;
        let task: TaskResponse = serde_json::from_str(reply).unwrap();

        assert_eq!(task.task_id, 792);
        assert_eq!(task.object_ids, vec!["38e2366d8892", "57a5627e5114"]);
    }

    #[test]
    fn test_task_response_from_settings_reply() {
        let reply = r#"{"taskID": 793, "updatedAt": "2026-10-16T09:00:00.000Z"}"#;
        let task: TaskResponse = serde_json::from_str(reply).unwrap();

        assert_eq!(task.task_id, 793);
        assert!(task.object_ids.is_empty());
    }

    #[test]
    fn test_empty_summary() {
        let summary = BatchOperationSummary::empty();
        assert_eq!(summary.total, 0);
        assert!(summary.task_id.is_none());
    }
}
