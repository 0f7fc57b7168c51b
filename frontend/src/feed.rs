//! Client side of the `/events` channel.
//!
//! The connection is an explicitly constructed value with a defined
//! create/dispose lifecycle: whoever mounts a live view calls
//! [`FeedClient::connect`] and keeps the handle; dropping it (or
//! calling [`FeedClient::close`]) tears the connection down. There is
//! no module-level singleton. Reconnection after a drop is the
//! browser's own `EventSource` behavior: automatic, unbounded, fixed
//! backoff.

use common::model::activity::ActivityEntry;
use futures_util::StreamExt;
use gloo_console::warn;
use gloo_net::eventsource::futures::{EventSource, EventSourceSubscription};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

pub struct FeedClient {
    source: Option<EventSource>,
}

impl FeedClient {
    /// Opens the stream and forwards every pushed entry, whatever its
    /// event name, to `on_entry`.
    pub fn connect(on_entry: Callback<ActivityEntry>) -> Result<Self, String> {
        let mut source = EventSource::new("/events").map_err(|e| e.to_string())?;
        for event_name in ["form:submitted", "activity:new"] {
            let subscription = source
                .subscribe(event_name)
                .map_err(|e| e.to_string())?;
            forward(subscription, on_entry.clone());
        }
        Ok(FeedClient {
            source: Some(source),
        })
    }

    /// Explicit global teardown; every consumer of this handle loses
    /// the stream.
    pub fn close(&mut self) {
        if let Some(source) = self.source.take() {
            source.close();
        }
    }
}

impl Drop for FeedClient {
    fn drop(&mut self) {
        self.close();
    }
}

fn forward(mut subscription: EventSourceSubscription, on_entry: Callback<ActivityEntry>) {
    spawn_local(async move {
        while let Some(message) = subscription.next().await {
            let Ok((event_name, message)) = message else {
                // The browser is already reconnecting; just wait.
                continue;
            };
            let Some(data) = message.data().as_string() else {
                continue;
            };
            match serde_json::from_str::<ActivityEntry>(&data) {
                Ok(entry) => on_entry.emit(entry),
                Err(err) => warn!(format!("unreadable {event_name} event: {err}")),
            }
        }
    });
}
