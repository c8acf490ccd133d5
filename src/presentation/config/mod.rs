mod settings;

pub use settings::{
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MODEL, DEFAULT_PORT, ENV_PREFIX, Settings, SettingsError,
};
