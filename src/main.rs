use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use beatcli::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Store account credentials and log in to Beatport
    Auth(AuthOptions),

    /// List catalog genres
    Genres(GenresOptions),

    /// List tracks of a genre
    Tracks(TracksOptions),

    /// Browse curated playlists
    Curated(CuratedOptions),

    /// Handle account playlists
    Playlists(PlaylistsOptions),

    /// Search tracks in the catalog
    Search(SearchOptions),

    /// Resolve the stream URL of a track
    StreamUrl(StreamUrlOptions),

    /// Show the subscription status
    Subscription,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Beatport account username
    #[clap(long)]
    pub username: Option<String>,

    /// Beatport account password
    #[clap(long)]
    pub password: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct GenresOptions {
    /// Number of pages to fetch
    #[clap(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Genre id to list tracks for
    pub genre_id: String,

    /// Fetch the top-100 chart instead of the full track list
    #[clap(long)]
    pub top: bool,

    /// Number of pages to fetch
    #[clap(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CuratedOptions {
    /// Genre id, or GENRE/PLAYLIST to list the tracks of one playlist
    pub path: String,

    /// Number of pages to fetch
    #[clap(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle account playlists",
    args_conflicts_with_subcommands = true // disallow mixing --pages with subcommands
)]
pub struct PlaylistsOptions {
    /// Number of pages to fetch
    #[clap(long, default_value_t = 1)]
    pub pages: u32,

    /// Subcommands under `playlists` (e.g., `tracks`)
    #[command(subcommand)]
    pub command: Option<PlaylistsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistsSubcommand {
    /// List the tracks of a playlist
    Tracks(PlaylistTracksOpts),

    /// Add tracks to a playlist
    Add(PlaylistAddOpts),

    /// Remove an entry from a playlist
    Remove(PlaylistRemoveOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistTracksOpts {
    /// Playlist id
    pub playlist_id: String,

    /// Number of pages to fetch
    #[clap(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistAddOpts {
    /// Playlist id
    pub playlist_id: String,

    /// Track ids to add
    #[clap(required = true)]
    pub track_ids: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistRemoveOpts {
    /// Playlist id
    pub playlist_id: String,

    /// Playlist entry id (see `playlists tracks`)
    pub entry_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    pub query: String,

    /// Number of pages to fetch
    #[clap(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct StreamUrlOptions {
    /// Track id to resolve
    pub track_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => cli::auth(opt.username, opt.password).await,
        Command::Genres(opt) => cli::list_genres(opt.pages).await,
        Command::Tracks(opt) => cli::list_tracks(opt.genre_id, opt.top, opt.pages).await,
        Command::Curated(opt) => cli::list_curated(opt.path, opt.pages).await,
        Command::Playlists(opt) => match opt.command {
            Some(PlaylistsSubcommand::Tracks(t)) => {
                cli::list_playlist_tracks(t.playlist_id, t.pages).await
            }
            Some(PlaylistsSubcommand::Add(a)) => {
                cli::add_playlist_tracks(a.playlist_id, a.track_ids).await
            }
            Some(PlaylistsSubcommand::Remove(r)) => {
                cli::remove_playlist_track(r.playlist_id, r.entry_id).await
            }
            None => cli::list_playlists(opt.pages).await,
        },
        Command::Search(opt) => cli::search(opt.query, opt.pages).await,
        Command::StreamUrl(opt) => cli::stream_url(opt.track_id).await,
        Command::Subscription => cli::subscription().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
