//! Live recent-activity widget for the admin dashboard.
//!
//! Seeds itself from `GET /admin/activity`, then merges pushed events
//! from the owned [`FeedClient`]. REST entries and pushed entries name
//! the same row through different id fields; `common::merge_feed`
//! de-duplicates, sorts by recency and caps the list.

use common::model::activity::{merge_feed, ActivityEntry};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::feed::FeedClient;

pub struct ActivityFeed {
    entries: Vec<ActivityEntry>,
    client: Option<FeedClient>,
    error: Option<String>,
}

pub enum Msg {
    Seeded(Vec<ActivityEntry>),
    Pushed(ActivityEntry),
    SeedFailed(String),
}

impl Component for ActivityFeed {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match Request::get("/admin/activity").send().await {
                Ok(response) if response.ok() => match response.json().await {
                    Ok(entries) => link.send_message(Msg::Seeded(entries)),
                    Err(err) => link.send_message(Msg::SeedFailed(err.to_string())),
                },
                Ok(response) => {
                    link.send_message(Msg::SeedFailed(format!("HTTP {}", response.status())))
                }
                Err(err) => link.send_message(Msg::SeedFailed(err.to_string())),
            }
        });

        let client = match FeedClient::connect(ctx.link().callback(Msg::Pushed)) {
            Ok(client) => Some(client),
            Err(err) => {
                gloo_console::error!(format!("event stream unavailable: {err}"));
                None
            }
        };

        Self {
            entries: Vec::new(),
            client,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Seeded(rest) => {
                self.entries = merge_feed(&self.entries, &rest);
                true
            }
            Msg::Pushed(entry) => {
                self.entries = merge_feed(&self.entries, &[entry]);
                true
            }
            Msg::SeedFailed(err) => {
                gloo_console::error!(format!("failed to load activity: {err}"));
                self.error = Some("Activité indisponible".to_string());
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="activity-feed">
                <h4>{"Activité récente"}</h4>
                {
                    if let Some(message) = &self.error {
                        html! { <p class="form-error">{ message }</p> }
                    } else {
                        html! {}
                    }
                }
                <ul>
                    {
                        self.entries.iter().map(|entry| html! {
                            <li key={entry.key().unwrap_or_default().to_string()}>
                                <span class={classes!("feed-kind", (entry.kind == "form:submitted").then_some("test"))}>
                                    { if entry.kind == "form:submitted" { "test" } else { "activité" } }
                                </span>
                                { &entry.message }
                                <time>{ &entry.created_at }</time>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // One explicit teardown for the shared connection lifecycle.
        if let Some(client) = &mut self.client {
            client.close();
        }
    }
}
