use std::{io::Write, path::PathBuf};

use argh::FromArgs;
use log::{info, LevelFilter};
use query::Query;
use ron::ser::PrettyConfig;
use spherecast::RaycastResult;

mod logger;
mod query;

/// Cast rays against a sphere and report where they hit
#[derive(FromArgs)]
struct Options {
    /// path to the query file
    #[argh(positional)]
    query: PathBuf,

    /// number of worker threads, 0 for one per CPU
    #[argh(option, short = 't', default = "0")]
    threads: usize,

    /// path to which the results should be written, stdout if omitted
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// log level (error, warn, info, debug, trace), overrides RUST_LOG
    #[argh(option)]
    log_level: Option<LevelFilter>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options: Options = argh::from_env();

    logger::init_logger(options.log_level);

    let query = Query::from_file(&options.query)?;
    let sphere = query.construct_sphere();

    let hits = spherecast::raycast_all(&sphere, &query.rays, options.threads);
    let results: Vec<RaycastResult> = hits.into_iter().map(RaycastResult::from).collect();

    info!(
        "{}/{} rays hit the sphere at {} with radius {}",
        results.iter().filter(|result| result.hit()).count(),
        results.len(),
        sphere.center(),
        sphere.radius()
    );

    let mut encoded = ron::ser::to_string_pretty(&results, PrettyConfig::default())?;
    encoded.push('\n');

    match options.output {
        Some(path) => std::fs::write(path, encoded)?,
        None => std::io::stdout().lock().write_all(encoded.as_bytes())?,
    }

    Ok(())
}
