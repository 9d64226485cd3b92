mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use commands::overwrite::OverwriteOptions;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (info unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cgtier=info,cgtier_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args.config);

    match args.command {
        Command::Convert {
            charts_path,
            songs_path,
            output_path,
        } => commands::convert::run(&charts_path, &songs_path, &output_path),
        Command::Build {
            version,
            template_path,
            tierlist_path,
            output_path,
        } => commands::build::run(&version, &template_path, &tierlist_path, &output_path),
        Command::Fetch { url, output_path } => commands::fetch::run(&url, &output_path),
        Command::List {
            tierlist,
            play_style,
            game_version,
        } => commands::list::run(&tierlist, play_style, game_version.as_deref()),
        Command::Overwrite {
            tierlist,
            page,
            play_style,
            tier_list,
            tier,
            start_offset,
            first_playlist,
            dry_run,
        } => commands::overwrite::run(
            &page,
            OverwriteOptions {
                tierlist_path: &tierlist,
                play_style,
                tier_list: &tier_list,
                tier: &tier,
                start_offset,
                first_playlist,
                dry_run,
            },
            &config,
        ),
        Command::Delete { page, play_style } => commands::delete::run(&page, play_style, &config),
    }
}
