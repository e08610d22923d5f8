mod config_loader;
pub use self::config_loader::ConfigLoader;
mod widget_config;
pub use self::widget_config::WidgetConfig;
