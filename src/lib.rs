mod avatar;
mod category;
mod cli;
mod feed;
mod fetcher;
mod format;
mod html;
mod progress;
mod site;

use std::path::Path;

use anyhow::Context as _;
use cli::Args;

pub use avatar::{Avatar, avatar_src, resolve_avatars};
pub use category::{Category, CategoryLink, GENERAL, category_link, resolve_category};
pub use cli::{Args as CliArgs, Mode, ProgressMode};
pub use feed::{LatestFeed, Poster, Topic, TopicList, User};
pub use fetcher::{FeedSource, FetchError, Fetcher};
pub use format::{
    UNKNOWN_ACTIVITY, ViewCount, abbreviate_count, activity_label, parse_timestamp, time_ago,
};
pub use html::{
    PostsContainer, RenderOutcome, build_document, fetch_and_render, render_rows,
    show_latest_posts,
};
pub use site::Site;

/// Loads the feed once, renders it, and writes the result to `args.out`.
///
/// A feed that cannot be loaded is logged and leaves the output file as it was.
pub async fn run(args: Args) -> anyhow::Result<RenderOutcome> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let progress = progress::Progress::new(progress_enabled);

    let source = match &args.input {
        Some(path) => {
            tracing::debug!(feed_url = %args.feed_url, "--input is set; not requesting the feed url");
            FeedSource::Local(path.clone())
        }
        None => FeedSource::Remote(args.feed_url.clone()),
    };
    let site = Site::new(
        args.topic_base_url.clone(),
        args.category_base_url.clone(),
        args.avatar_cdn_url.clone(),
        args.avatar_size,
    );
    let fetcher = Fetcher::new(&args.user_agent)?;

    progress.set_stage(format!("loading {source}"));
    let mut container = PostsContainer::new();
    let outcome =
        fetch_and_render(&fetcher, &source, &mut container, &site, chrono::Utc::now()).await;

    if outcome == RenderOutcome::Skipped {
        progress.finish("feed unavailable");
        return Ok(outcome);
    }

    progress.set_stage("writing output");
    let body = match args.mode {
        Mode::Document => build_document(&container, &args.title),
        Mode::Fragment => container.inner_html().to_string(),
    };
    write_output(&args.out, &body)?;
    tracing::info!(out = %args.out.display(), "wrote latest topics");

    progress.finish("done");
    Ok(outcome)
}

fn write_output(path: &Path, body: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    std::fs::write(path, body).with_context(|| format!("write {}", path.display()))
}
