//! Contains global statics

use config::Config;
use once_cell::sync::Lazy;

/// The configuration loaded from config file
pub(crate) static CONFIG: Lazy<Config> = Lazy::new(|| {
  Config::builder()
    .add_source(config::File::with_name("config.toml").required(false))
    // Add in settings from the environment (with a prefix of SIGNIN)
    // E.g. `SIGNIN_VIEWPORT_HEIGHT=600 ./target/app` would set the `viewport_height` key
    .add_source(config::Environment::with_prefix("SIGNIN"))
    .build()
    .expect("Configuration should be readable!")
});
