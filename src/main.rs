use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        backend::init_tracing();

        let rt = tokio::runtime::Runtime::new().expect("rt");
        if let Err(e) = rt.block_on(backend::serve(app::App)) {
            eprintln!("[server] {e:#}");
            std::process::exit(1);
        }
    }
    #[cfg(not(feature = "server"))]
    dioxus::launch(app::App);
}
