//! CLI argument definitions for cgtier.

use std::path::PathBuf;

use cgtier_core::PlayStyle;
use cgtier_core::config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cgtier")]
#[command(about = "IIDX tier list playlists for CG web UIs", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert Tachi charts and songs exports into a tier list dataset
    Convert {
        /// Tachi charts JSON file
        charts_path: PathBuf,
        /// Tachi songs JSON file
        songs_path: PathBuf,
        /// Output tier list JSON file
        output_path: PathBuf,
    },
    /// Render the userscript with an embedded tier list dataset
    Build {
        /// Version string written into the userscript header
        version: String,
        /// Userscript template file
        template_path: PathBuf,
        /// Tier list JSON file
        tierlist_path: PathBuf,
        /// Output userscript file
        output_path: PathBuf,
    },
    /// Download a file and write it verbatim
    Fetch {
        /// URL to download
        url: String,
        /// Output file path
        output_path: PathBuf,
    },
    /// List tier lists and tiers of a dataset
    List {
        /// Tier list JSON file
        #[arg(long, short = 't', default_value = "tierlist.json")]
        tierlist: PathBuf,
        /// Play style (sp, dp)
        #[arg(long, short = 's', default_value = "sp")]
        play_style: PlayStyle,
        /// Game version used to count available songs
        #[arg(long, short = 'g')]
        game_version: Option<String>,
    },
    /// Overwrite playlists with the songs of a tier
    Overwrite {
        /// Tier list JSON file
        #[arg(long, short = 't', default_value = "tierlist.json")]
        tierlist: PathBuf,
        #[command(flatten)]
        page: PageArgs,
        /// Play style (sp, dp)
        #[arg(long, short = 's', default_value = "sp")]
        play_style: PlayStyle,
        /// Tier list name (e.g. "Hard")
        #[arg(long)]
        tier_list: String,
        /// Tier label (e.g. "A+")
        #[arg(long)]
        tier: String,
        /// Number of songs of the tier to skip
        #[arg(long, default_value = "0")]
        start_offset: usize,
        /// First playlist to overwrite (1-based)
        #[arg(long, default_value = "1")]
        first_playlist: usize,
        /// Print the playlists without sending anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Delete every playlist of a play style
    Delete {
        #[command(flatten)]
        page: PageArgs,
        /// Play style (sp, dp)
        #[arg(long, short = 's', default_value = "sp")]
        play_style: PlayStyle,
    },
}

/// Playlists page connection and state
#[derive(clap::Args)]
pub struct PageArgs {
    /// Playlists page URL
    #[arg(long, env = "CGTIER_PAGE_URL")]
    pub page_url: Option<String>,
    /// Cookie header carrying the web UI session
    #[arg(long, env = "CGTIER_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,
    /// Game version selected on the page (e.g. 31)
    #[arg(long, short = 'g')]
    pub game_version: String,
    /// Number of playlist slots on the page
    #[arg(long, default_value = "20")]
    pub playlists: usize,
    /// Maximum songs per playlist
    #[arg(long, default_value = "100")]
    pub max_songs: usize,
}
