use serde::{Deserialize, Serialize};

/// Dashboards show at most this many recent entries.
pub const FEED_CAP: usize = 5;

/// One entry of the admin activity feed.
///
/// REST-sourced entries carry `id`; entries pushed over the event
/// channel carry `activityId` for the same underlying row. Both name
/// the same identity, which is why merging goes through [`key`].
///
/// [`key`]: ActivityEntry::key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<i64>,
    /// `form:submitted` or `activity:new`.
    pub kind: String,
    pub message: String,
    /// RFC 3339; lexicographic order is chronological order.
    pub created_at: String,
}

impl ActivityEntry {
    pub fn key(&self) -> Option<i64> {
        self.id.or(self.activity_id)
    }
}

/// Merges freshly received entries into a known list: de-duplicates on
/// the underlying identity, sorts by `createdAt` descending and caps at
/// [`FEED_CAP`]. Entries without any id are kept as-is.
pub fn merge_feed(known: &[ActivityEntry], incoming: &[ActivityEntry]) -> Vec<ActivityEntry> {
    let mut merged: Vec<ActivityEntry> = Vec::with_capacity(known.len() + incoming.len());
    for entry in known.iter().chain(incoming) {
        let duplicate = entry
            .key()
            .is_some_and(|key| merged.iter().any(|seen| seen.key() == Some(key)));
        if !duplicate {
            merged.push(entry.clone());
        }
    }
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merged.truncate(FEED_CAP);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest(id: i64, created_at: &str) -> ActivityEntry {
        ActivityEntry {
            id: Some(id),
            created_at: created_at.to_string(),
            kind: "activity:new".to_string(),
            ..Default::default()
        }
    }

    fn pushed(id: i64, created_at: &str) -> ActivityEntry {
        ActivityEntry {
            activity_id: Some(id),
            created_at: created_at.to_string(),
            kind: "activity:new".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn socket_duplicate_of_rest_entry_is_dropped() {
        let known = vec![rest(7, "2025-03-01T10:00:00Z")];
        let incoming = vec![pushed(7, "2025-03-01T10:00:00Z")];
        let merged = merge_feed(&known, &incoming);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, Some(7));
    }

    #[test]
    fn merged_feed_is_sorted_descending_and_capped() {
        let known: Vec<ActivityEntry> = (1..=4)
            .map(|i| rest(i, &format!("2025-03-0{i}T08:00:00Z")))
            .collect();
        let incoming = vec![
            pushed(10, "2025-03-06T08:00:00Z"),
            pushed(11, "2025-03-05T08:00:00Z"),
        ];
        let merged = merge_feed(&known, &incoming);
        assert_eq!(merged.len(), FEED_CAP);
        let keys: Vec<i64> = merged.iter().filter_map(ActivityEntry::key).collect();
        assert_eq!(keys, vec![10, 11, 4, 3, 2]);
    }

    #[test]
    fn entries_without_ids_are_kept() {
        let incoming = vec![ActivityEntry {
            message: "connexion admin".to_string(),
            created_at: "2025-03-01T09:00:00Z".to_string(),
            ..Default::default()
        }];
        assert_eq!(merge_feed(&[], &incoming).len(), 1);
    }

    #[test]
    fn wire_uses_activity_id_for_pushed_entries() {
        let entry = pushed(3, "2025-03-01T09:00:00Z");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""activityId":3"#));
        assert!(!json.contains(r#""id""#));
    }
}
