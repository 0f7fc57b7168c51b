//! Back-office dashboard: stats tiles, the program list with its
//! criteria editor and details modal, and the live activity feed.

use common::model::program::Program;
use common::model::stats::AdminStats;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::activity_feed::ActivityFeed;
use crate::components::program_details::ProgramDetailsModal;
use crate::components::rule_builder::RuleBuilder;

pub struct AdminDashboard {
    programs: Vec<Program>,
    stats: Option<AdminStats>,
    editing: Option<Program>,
    details: Option<Program>,
    error: Option<String>,
}

pub enum Msg {
    ProgramsLoaded(Vec<Program>),
    StatsLoaded(AdminStats),
    LoadFailed(String),
    NewProgram,
    Edit(usize),
    ShowDetails(usize),
    CloseDetails,
    CancelEdit,
    SaveProgram(Program),
    TogglePublish(i64),
    Reload,
}

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        load(ctx);
        Self {
            programs: Vec::new(),
            stats: None,
            editing: None,
            details: None,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ProgramsLoaded(programs) => {
                self.programs = programs;
                self.error = None;
                true
            }
            Msg::StatsLoaded(stats) => {
                self.stats = Some(stats);
                true
            }
            Msg::LoadFailed(err) => {
                gloo_console::error!(format!("dashboard load failed: {err}"));
                self.error = Some("Une erreur est survenue".to_string());
                true
            }
            Msg::NewProgram => {
                self.editing = Some(Program::default());
                true
            }
            Msg::Edit(index) => {
                self.editing = self.programs.get(index).cloned();
                true
            }
            Msg::ShowDetails(index) => {
                self.details = self.programs.get(index).cloned();
                true
            }
            Msg::CloseDetails => {
                self.details = None;
                true
            }
            Msg::CancelEdit => {
                self.editing = None;
                true
            }
            Msg::SaveProgram(program) => {
                self.editing = None;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let request = match program.id {
                        Some(id) => Request::put(&format!("/programs/{id}")).json(&program),
                        None => Request::post("/programs").json(&program),
                    };
                    let outcome = match request {
                        Ok(request) => request.send().await.map(|_| ()).map_err(|e| e.to_string()),
                        Err(err) => Err(err.to_string()),
                    };
                    match outcome {
                        Ok(()) => link.send_message(Msg::Reload),
                        Err(err) => link.send_message(Msg::LoadFailed(err)),
                    }
                });
                true
            }
            Msg::TogglePublish(id) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match Request::put(&format!("/programs/{id}/toggle")).send().await {
                        Ok(_) => link.send_message(Msg::Reload),
                        Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                    }
                });
                false
            }
            Msg::Reload => {
                load(ctx);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="admin-dashboard">
                { self.build_stats() }
                {
                    if let Some(message) = &self.error {
                        html! { <p class="form-error">{ message }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="program-panel">
                    <h3>{"Programmes"}</h3>
                    <button onclick={link.callback(|_| Msg::NewProgram)}>{"+ Nouveau programme"}</button>
                    <ul class="program-list">
                        {
                            self.programs.iter().enumerate().map(|(index, program)| {
                                let id = program.id.unwrap_or_default();
                                html! {
                                    <li key={id.to_string()}>
                                        <span>{ &program.nom }</span>
                                        <span class="program-meta">
                                            { if program.published { "publié" } else { "brouillon" } }
                                        </span>
                                        <button onclick={link.callback(move |_| Msg::ShowDetails(index))}>{"Détails"}</button>
                                        <button onclick={link.callback(move |_| Msg::Edit(index))}>{"Critères"}</button>
                                        <button onclick={link.callback(move |_| Msg::TogglePublish(id))}>
                                            { if program.published { "Dépublier" } else { "Publier" } }
                                        </button>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                {
                    if let Some(program) = &self.editing {
                        html! {
                            <RuleBuilder
                                program={program.clone()}
                                on_save={link.callback(Msg::SaveProgram)}
                                on_cancel={link.callback(|_| Msg::CancelEdit)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(program) = &self.details {
                        html! {
                            <ProgramDetailsModal
                                program={program.clone()}
                                on_close={link.callback(|_| Msg::CloseDetails)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <ActivityFeed />
            </div>
        }
    }
}

impl AdminDashboard {
    fn build_stats(&self) -> Html {
        let Some(stats) = &self.stats else {
            return html! {};
        };
        let tile = |label: &str, value: i64| {
            html! {
                <div class="stat-tile">
                    <strong>{ value }</strong>
                    <span>{ label }</span>
                </div>
            }
        };
        html! {
            <div class="stat-row">
                { tile("tests soumis", stats.total_tests) }
                { tile("utilisateurs", stats.total_persons) }
                { tile("demandes de contact", stats.contact_requests) }
            </div>
        }
    }
}

fn load(ctx: &Context<AdminDashboard>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match Request::get("/programs").send().await {
            Ok(response) if response.ok() => match response.json().await {
                Ok(programs) => link.send_message(Msg::ProgramsLoaded(programs)),
                Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
            },
            Ok(response) => link.send_message(Msg::LoadFailed(format!("HTTP {}", response.status()))),
            Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
        }
    });

    let link = ctx.link().clone();
    spawn_local(async move {
        if let Ok(response) = Request::get("/stats/admin").send().await {
            if response.ok() {
                if let Ok(stats) = response.json::<AdminStats>().await {
                    link.send_message(Msg::StatsLoaded(stats));
                }
            }
        }
    });
}
