//! Records admin-visible activity and fans it out to live dashboards.
//!
//! Handlers push [`ActivityEvent`]s onto an MPSC channel and move on;
//! the recorder task persists each event to the activity table, then
//! rebroadcasts it to every `/events` subscriber. This keeps request
//! handlers decoupled from both the activity table and the SSE side.
//!
//! The main components are:
//! - `ActivityHub`: a clonable handle holding both channel ends,
//!   injected into the Actix application state in `main.rs`.
//! - `start_activity_recorder`: the long-running task draining the
//!   MPSC channel.

use common::model::activity::ActivityEntry;
use tokio::sync::{broadcast, mpsc};

use crate::config::Config;
use crate::db;

/// What happened, mapped onto the two event names the feed exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// A visitor submitted the eligibility questionnaire.
    FormSubmitted,
    /// Any other admin-relevant change (program saved, article
    /// published, ...).
    Generic,
}

impl ActivityKind {
    pub fn event_name(self) -> &'static str {
        match self {
            ActivityKind::FormSubmitted => "form:submitted",
            ActivityKind::Generic => "activity:new",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    pub message: String,
}

/// One serialized SSE frame: the event name plus the entry JSON.
#[derive(Debug, Clone)]
pub struct FeedEvent {
    pub event: &'static str,
    pub data: String,
}

/// Clonable handle shared across the Actix application as `web::Data`.
#[derive(Clone)]
pub struct ActivityHub {
    tx: mpsc::Sender<ActivityEvent>,
    pub feed: broadcast::Sender<FeedEvent>,
}

impl ActivityHub {
    pub fn new(tx: mpsc::Sender<ActivityEvent>, feed: broadcast::Sender<FeedEvent>) -> Self {
        ActivityHub { tx, feed }
    }

    /// Fire-and-forget: a full channel drops the event rather than
    /// blocking the request handler.
    pub fn record(&self, kind: ActivityKind, message: impl Into<String>) {
        let event = ActivityEvent {
            kind,
            message: message.into(),
        };
        if let Err(err) = self.tx.try_send(event) {
            log::warn!("activity event dropped: {err}");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.feed.subscribe()
    }
}

/// Drains the MPSC channel: persists each event, then rebroadcasts it
/// to live subscribers. Spawned once from `main.rs`.
pub async fn start_activity_recorder(
    cfg: Config,
    hub: ActivityHub,
    mut rx: mpsc::Receiver<ActivityEvent>,
) {
    while let Some(event) = rx.recv().await {
        match persist(&cfg, &event) {
            Ok(entry) => {
                let data = serde_json::to_string(&entry).unwrap_or_default();
                // No subscribers is not an error.
                let _ = hub.feed.send(FeedEvent {
                    event: event.kind.event_name(),
                    data,
                });
            }
            Err(err) => log::error!("failed to record activity: {err}"),
        }
    }
}

fn persist(cfg: &Config, event: &ActivityEvent) -> rusqlite::Result<ActivityEntry> {
    let conn = db::open(cfg)?;
    let created_at = db::now();
    conn.execute(
        "INSERT INTO activity (kind, message, created_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![event.kind.event_name(), event.message, created_at],
    )?;
    Ok(ActivityEntry {
        id: None,
        // Pushed entries carry the row id under `activityId`.
        activity_id: Some(conn.last_insert_rowid()),
        kind: event.kind.event_name().to_string(),
        message: event.message.clone(),
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::config_in;

    #[test]
    fn persist_assigns_activity_id_not_id() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        crate::db::init(&cfg).unwrap();

        let entry = persist(
            &cfg,
            &ActivityEvent {
                kind: ActivityKind::FormSubmitted,
                message: "nouveau test".to_string(),
            },
        )
        .unwrap();
        assert_eq!(entry.activity_id, Some(1));
        assert_eq!(entry.id, None);
        assert_eq!(entry.kind, "form:submitted");
    }
}
