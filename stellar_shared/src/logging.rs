use env_logger::Env;

/// Sets up env_logger for a tool binary. `RUST_LOG` always wins, otherwise
/// debug mode picks `debug` and everything else gets `info`.
pub fn init(debug_mode: bool) {
    let default_filter = if debug_mode { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
    log::debug!("logging initialized at {}", default_filter);
}
