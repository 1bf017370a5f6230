use marquee_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("marquee_player", LevelFilter::Debug)
        .filter_module("marquee_core", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::debug!("RUST_LOG not set, using default log filters");
    } else {
        env_logger::init();
        log::debug!("Initialized logger from RUST_LOG");
    }

    let config = AppConfig::from_environment();

    app::application(config).run()
}
