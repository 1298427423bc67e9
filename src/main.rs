mod backend;
mod frontend;
mod utils;

use crate::backend::utils::config::AppConfig;
use crate::frontend::app::App;
use dioxus::LaunchBuilder;

#[cfg(feature = "desktop")]
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    let (config, config_error) = load_config();

    // Logging setup
    utils::logging::init(&config.logging.level);
    if let Some(e) = config_error {
        log::warn!("{e:#}, using default settings");
    }

    let builder = LaunchBuilder::new().with_context(config);

    #[cfg(feature = "desktop")]
    let builder = {
        let size = LogicalSize::new(1280.0, 832.0);
        builder.with_cfg(
            Config::default()
                .with_window(
                    WindowBuilder::new()
                        .with_title("评论管理系统")
                        .with_inner_size(size)
                        .with_min_inner_size(size),
                )
                .with_menu(None),
        )
    };

    builder.launch(App);
}

#[cfg(not(feature = "web"))]
fn load_config() -> (AppConfig, Option<anyhow::Error>) {
    match backend::utils::paths::get_config_path() {
        Ok(path) => AppConfig::load_or_default(&path),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

#[cfg(feature = "web")]
fn load_config() -> (AppConfig, Option<anyhow::Error>) {
    (AppConfig::default(), None)
}
