//! Binary entrypoint for the Stickies desktop application.

mod app;
mod theme;

fn main() -> iced::Result {
    env_logger::init();
    app::run()
}
