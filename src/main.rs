mod components;
mod consts;
mod frame;
mod geometry;
mod model;
mod persist;
mod render;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
