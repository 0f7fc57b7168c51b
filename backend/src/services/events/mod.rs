//! The server->client event channel behind the live dashboards.
//!
//! `GET /events` holds a `text/event-stream` response open and relays
//! every broadcast frame as a named SSE event (`form:submitted` or
//! `activity:new`). Reconnection is entirely client-driven: the
//! browser's `EventSource` retries on its own, so a dropped stream
//! needs no server-side bookkeeping. A subscriber that lags behind the
//! broadcast buffer skips the missed frames rather than killing the
//! stream.

use actix_web::web::{get, scope, Bytes};
use actix_web::{web, HttpResponse, Responder, Scope};
use futures_util::stream;
use tokio::sync::broadcast;

use crate::activity::state::{ActivityHub, FeedEvent};

pub fn configure_routes() -> Scope {
    scope("/events").route("", get().to(process))
}

pub async fn process(hub: web::Data<ActivityHub>) -> impl Responder {
    let rx = hub.subscribe();
    let frames = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    return Some((Ok::<_, std::convert::Infallible>(sse_frame(&event)), rx));
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::warn!("SSE subscriber lagged, skipped {skipped} events");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(frames)
}

fn sse_frame(event: &FeedEvent) -> Bytes {
    Bytes::from(format!("event: {}\ndata: {}\n\n", event.event, event.data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_named_sse_events() {
        let frame = sse_frame(&FeedEvent {
            event: "form:submitted",
            data: r#"{"activityId":1}"#.to_string(),
        });
        let text = std::str::from_utf8(&frame).unwrap();
        assert_eq!(
            text,
            "event: form:submitted\ndata: {\"activityId\":1}\n\n"
        );
    }
}
