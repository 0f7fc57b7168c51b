use crate::app::App;

mod app;
mod components;
mod feed;

fn main() {
    yew::Renderer::<App>::new().render();
}
