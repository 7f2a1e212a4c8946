mod app;
mod boundary;
mod components;
mod services;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("parlor frontend starting");
    yew::Renderer::<App>::new().render();
}
