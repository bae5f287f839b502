mod settings;

pub use settings::{
    ChannelKind, ChannelSettings, LogConfig, LogFormat, OtelConfig, ServerConfig, Settings,
    SlackConfig,
};
