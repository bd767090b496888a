use std::io;

use getxattr::{AttributeReader, Invocation, load_config};
use snafu::{Whatever, prelude::*};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[snafu::report]
fn main() -> Result<(), Whatever> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let config = load_config().whatever_context("failed to load config")?;
    debug!("Starting with configuration: {config}");

    let invocation =
        Invocation::from_args(std::env::args_os()).whatever_context("invalid arguments")?;

    let outcome = AttributeReader::new(&config)
        .run(&invocation, &mut io::stdout().lock())
        .whatever_context("failed to print attribute")?;
    outcome
        .into_result(config.exit_policy)
        .whatever_context("attribute unavailable")?;

    Ok(())
}
