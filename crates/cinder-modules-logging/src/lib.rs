use env_logger::Env;
use log::LevelFilter;

/// Installs the process-wide logger.
///
/// `RUST_LOG` wins over `default_level`. Returns `false` when a logger was
/// already installed, which is fine: the first one stays active.
pub fn init(default_level: LevelFilter) -> bool {
    let env = Env::default().default_filter_or(default_level.to_string().to_lowercase());

    let ok = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_ok();

    if ok {
        log::debug!("logger installed (default level {default_level})");
    }
    ok
}
