use env_logger::Env;
use log::LevelFilter;

/// Initialize the logger from `RUST_LOG` (default `info`), with `level`
/// taking precedence when given.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}
