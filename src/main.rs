use anyhow::Result;
use clap::Parser;
use terrain_ascii::cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    terrain_ascii::run(cli)
}
