// crates/garden-core/src/flowers.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::{GardenError, Result};

/// A submitted flower as stored by the backing service.
///
/// The layout engine only reads `id`. Everything else is carried through
/// untouched for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowerRecord {
    pub id: String,
    pub image_url: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Feeds of already-approved flowers omit this column.
    #[serde(default = "default_approved")]
    pub approved: bool,
}

fn default_approved() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationStatus {
    Pending,
    Approved,
}

impl FlowerRecord {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            message: None,
            approved: true,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        let trimmed = message.trim();
        self.message = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn pending(mut self) -> Self {
        self.approved = false;
        self
    }

    pub fn status(&self) -> ModerationStatus {
        if self.approved {
            ModerationStatus::Approved
        } else {
            ModerationStatus::Pending
        }
    }
}

/// Keep only flowers an admin has approved for the public garden.
pub fn approved_flowers(records: &[FlowerRecord]) -> Vec<FlowerRecord> {
    records
        .iter()
        .filter(|record| record.status() == ModerationStatus::Approved)
        .cloned()
        .collect()
}

/// Ascending id order. Placement depends on this order only, never on the
/// order the store returned rows in.
pub fn canonical_order(records: &[FlowerRecord]) -> Vec<&FlowerRecord> {
    let mut sorted: Vec<&FlowerRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));
    sorted
}

pub fn validate_unique_ids(records: &[FlowerRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(GardenError::DuplicateFlowerId(record.id.clone()));
        }
    }
    Ok(())
}

pub fn parse_flowers(json: &str) -> Result<Vec<FlowerRecord>> {
    let records: Vec<FlowerRecord> = serde_json::from_str(json)?;
    debug!("Parsed {} flower records", records.len());
    Ok(records)
}

pub fn load_flowers<P: AsRef<Path>>(path: P) -> Result<Vec<FlowerRecord>> {
    let data = std::fs::read_to_string(path.as_ref())?;
    parse_flowers(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_approved_column_defaults_to_approved() {
        let records = parse_flowers(r#"[{"id": "a", "image_url": "a.png"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].approved);
        assert_eq!(records[0].message, None);
    }

    #[test]
    fn test_approved_filter_drops_pending() {
        let records = vec![
            FlowerRecord::new("a", "a.png"),
            FlowerRecord::new("b", "b.png").pending(),
            FlowerRecord::new("c", "c.png").with_message("hello"),
        ];
        let approved = approved_flowers(&records);
        let ids: Vec<&str> = approved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_status_follows_approved_flag() {
        assert_eq!(FlowerRecord::new("a", "a.png").pending().status(), ModerationStatus::Pending);
        assert_eq!(FlowerRecord::new("a", "a.png").status(), ModerationStatus::Approved);
    }

    #[test]
    fn test_blank_message_is_dropped() {
        let record = FlowerRecord::new("a", "a.png").with_message("   ");
        assert_eq!(record.message, None);
        let record = FlowerRecord::new("a", "a.png").with_message("  hi there ");
        assert_eq!(record.message.as_deref(), Some("hi there"));
    }

    #[test]
    fn test_canonical_order_sorts_by_id() {
        let records = vec![
            FlowerRecord::new("c", "c.png"),
            FlowerRecord::new("a", "a.png"),
            FlowerRecord::new("b", "b.png"),
        ];
        let ids: Vec<&str> = canonical_order(&records).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let records = vec![FlowerRecord::new("a", "1.png"), FlowerRecord::new("a", "2.png")];
        match validate_unique_ids(&records) {
            Err(GardenError::DuplicateFlowerId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
        assert!(validate_unique_ids(&records[..1]).is_ok());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(parse_flowers("{not json"), Err(GardenError::Json(_))));
    }
}
