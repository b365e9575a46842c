use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::avatar::resolve_avatars;
use crate::category::category_link;
use crate::feed::{LatestFeed, Topic, User};
use crate::fetcher::{FeedSource, Fetcher};
use crate::format::{abbreviate_count, activity_label};
use crate::site::Site;

/// The element the topic rows are written into. Each render replaces its whole content.
#[derive(Debug, Default)]
pub struct PostsContainer {
    inner_html: String,
}

impl PostsContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn replace(&mut self, markup: Markup) {
        self.inner_html = markup.into_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { topics: usize },
    Skipped,
}

/// Fetches the feed once and renders it into `container`.
///
/// Fetch and parse failures are logged and swallowed; the container keeps
/// whatever it held before.
pub async fn fetch_and_render(
    fetcher: &Fetcher,
    source: &FeedSource,
    container: &mut PostsContainer,
    site: &Site,
    now: DateTime<Utc>,
) -> RenderOutcome {
    let feed = match fetcher.fetch_feed(source).await {
        Ok(feed) => feed,
        Err(err) => {
            let err = anyhow::Error::new(err);
            tracing::error!(%source, error = ?err, "could not load latest topics");
            return RenderOutcome::Skipped;
        }
    };

    let topics = feed.topic_list.topics.len();
    show_latest_posts(container, &feed, site, now);
    tracing::info!(topics, users = feed.users.len(), "rendered latest topics");
    RenderOutcome::Rendered { topics }
}

pub fn show_latest_posts(
    container: &mut PostsContainer,
    feed: &LatestFeed,
    site: &Site,
    now: DateTime<Utc>,
) {
    container.replace(render_rows(feed, site, now));
}

pub fn render_rows(feed: &LatestFeed, site: &Site, now: DateTime<Utc>) -> Markup {
    html! {
        @for topic in &feed.topic_list.topics {
            (render_topic_row(topic, &feed.users, site, now))
        }
    }
}

fn render_topic_row(topic: &Topic, users: &[User], site: &Site, now: DateTime<Utc>) -> Markup {
    let avatars = resolve_avatars(&topic.posters, users, &site.avatar_cdn, site.avatar_size);

    html! {
        tr {
            td {
                a class="post-title" target="_blank" href=(site.topic_href(&topic.slug, topic.id)) {
                    (topic.title)
                }
                (category_link(&site.category_base, topic.category_id))
            }
            td {
                div class="avatar-container" {
                    @for avatar in &avatars {
                        (avatar)
                    }
                }
            }
            td { (topic.reply_count()) }
            td { (abbreviate_count(topic.views).to_string()) }
            td { (activity_label(topic.bumped_at.as_deref(), now)) }
        }
    }
}

/// Wraps the container into a standalone page.
pub fn build_document(container: &PostsContainer, title: &str) -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                main {
                    h1 { (title) }
                    table {
                        thead {
                            tr {
                                th { "Topics" }
                                th { "Avatars" }
                                th { "Replies" }
                                th { "Views" }
                                th { "Activity" }
                            }
                        }
                        tbody id="posts-container" {
                            (PreEscaped(container.inner_html()))
                        }
                    }
                }
            }
        }
    };
    markup.into_string()
}
