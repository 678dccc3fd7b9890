use clap::Parser;

use gh_release_manager::{
    ForgeManager, Github, ReleaseManagerError, Result, cli, command,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("gh_release_manager")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .map_err(ReleaseManagerError::from)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let remote = cli_args.get_remote()?;
    let forge = ForgeManager::new(Box::new(Github::new(remote)?));

    match cli_args.command {
        cli::Command::Info { out_file } => {
            command::info::execute(&forge, out_file).await
        }
        cli::Command::CreateRc { bump, out_file } => {
            command::create_rc::execute(&forge, bump, out_file).await
        }
    }
}
