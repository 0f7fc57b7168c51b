use yew::{classes, html, Component, Context, Html};

use crate::components::admin::AdminDashboard;
use crate::components::eligibility::EligibilityForm;

/// Root of the app: the public questionnaire, plus the back-office
/// behind a tab switch.
pub struct App {
    active_tab: String,
}

pub enum Msg {
    SetTab(String),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_tab: "test".to_string(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.active_tab = tab;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-root">
                <nav class="tab-bar">
                    <button
                        class={classes!("tab-btn", (self.active_tab == "test").then_some("active"))}
                        onclick={link.callback(|_| Msg::SetTab("test".to_string()))}
                    >
                        {"Test d'éligibilité"}
                    </button>
                    <button
                        class={classes!("tab-btn", (self.active_tab == "admin").then_some("active"))}
                        onclick={link.callback(|_| Msg::SetTab("admin".to_string()))}
                    >
                        {"Administration"}
                    </button>
                </nav>
                {
                    if self.active_tab == "admin" {
                        html! { <AdminDashboard /> }
                    } else {
                        html! { <EligibilityForm /> }
                    }
                }
            </div>
        }
    }
}
