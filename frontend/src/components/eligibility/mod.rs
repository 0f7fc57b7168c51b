//! The public eligibility questionnaire.
//!
//! Split Elm-style: `state` holds the component struct, `messages` its
//! message enum, `update` the transition function and `view` the
//! rendering, with shared utilities in `helpers`. Validation and the
//! year computation live in `common` and are reused verbatim by the
//! backend.

mod helpers;
mod messages;
mod state;
mod update;
mod view;

use yew::{Component, Context, Html};

pub use state::EligibilityForm;

use messages::Msg;

impl Component for EligibilityForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        EligibilityForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
