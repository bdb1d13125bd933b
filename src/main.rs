use clap::Parser;
use tracing_subscriber::EnvFilter;

use agtype_codec::cli::Args;
use agtype_codec::config::{ConfigFile, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let file = ConfigFile::load()?;
    let settings = Settings::resolve(
        args.format,
        args.command.named_floats_flag(),
        &file,
        |key| std::env::var(key).ok(),
    );
    let output = args.command.run(&settings)?;
    println!("{}", output);
    Ok(())
}
