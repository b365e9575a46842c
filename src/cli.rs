use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::site;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// A complete HTML page with the rows inside a table.
    Document,
    /// Only the `<tr>` rows, ready to drop into an existing container.
    Fragment,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// URL of the forum's "latest topics" JSON feed.
    #[arg(long, default_value = site::DEFAULT_FEED_URL)]
    pub feed_url: Url,

    /// Read the feed from a local JSON file instead of `--feed-url`.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Base URL for topic links; `<slug>/<id>` is appended.
    #[arg(long, default_value = site::DEFAULT_TOPIC_BASE_URL)]
    pub topic_base_url: Url,

    /// Base URL for category links; `<style tag>/<category id>` is appended.
    #[arg(long, default_value = site::DEFAULT_CATEGORY_BASE_URL)]
    pub category_base_url: Url,

    /// Host prepended to site-relative `/user_avatar/...` templates.
    #[arg(long, default_value = site::DEFAULT_AVATAR_CDN_URL)]
    pub avatar_cdn_url: Url,

    /// Avatar size for `{size}` substitution in `avatar_template`.
    #[arg(long, default_value_t = site::DEFAULT_AVATAR_SIZE)]
    pub avatar_size: u32,

    /// Output mode: `document` (full HTML page) or `fragment` (table rows only).
    #[arg(long, value_enum, default_value = "document")]
    pub mode: Mode,

    /// Output file. Left untouched when the feed cannot be loaded.
    #[arg(long, default_value = "latest.html")]
    pub out: PathBuf,

    /// Page title for `document` mode.
    #[arg(long, default_value = "Latest Topics")]
    pub title: String,

    /// HTTP User-Agent used for the feed request.
    #[arg(long, default_value = "forum-latest-render/0.1")]
    pub user_agent: String,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}
