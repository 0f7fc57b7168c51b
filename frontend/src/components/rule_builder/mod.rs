//! Visual editor for a program's criteria tree.
//!
//! The component edits a working copy of the program and hands it back
//! through `on_save`; the value-shape logic itself lives in
//! `common::builder` so the guarantees (2-element `between` lists,
//! filter-scoped bulk selection) are independent of the DOM.

mod messages;
mod state;
mod update;
mod view;

use common::model::program::Program;
use yew::{Callback, Component, Context, Html, Properties};

pub use messages::operator_label;
pub use state::RuleBuilder;

use messages::Msg;

#[derive(Properties, PartialEq, Clone)]
pub struct RuleBuilderProps {
    pub program: Program,
    pub on_save: Callback<Program>,
    #[prop_or_default]
    pub on_cancel: Callback<()>,
}

impl Component for RuleBuilder {
    type Message = Msg;
    type Properties = RuleBuilderProps;

    fn create(ctx: &Context<Self>) -> Self {
        RuleBuilder::new(ctx.props().program.clone())
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // A different program was selected; restart from its tree.
        *self = RuleBuilder::new(ctx.props().program.clone());
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
