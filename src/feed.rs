use serde::Deserialize;

/// Body of the forum's `latest.json` endpoint.
#[derive(Debug, Deserialize)]
pub struct LatestFeed {
    pub topic_list: TopicList,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub struct TopicList {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Deserialize)]
pub struct Topic {
    pub id: u64,
    pub title: String,
    pub views: u64,
    pub posts_count: u64,
    pub slug: String,
    #[serde(default)]
    pub posters: Vec<Poster>,
    pub category_id: i64,
    /// Kept raw; parsed per row so one odd value cannot reject the feed.
    #[serde(default)]
    pub bumped_at: Option<String>,
}

impl Topic {
    /// Posts after the opening one.
    pub fn reply_count(&self) -> u64 {
        self.posts_count.saturating_sub(1)
    }
}

#[derive(Debug, Deserialize)]
pub struct Poster {
    pub user_id: i64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_template: String,
}

impl User {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.username.as_deref().unwrap_or(""),
        }
    }
}
