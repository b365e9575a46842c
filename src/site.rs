use url::Url;

pub const DEFAULT_FEED_URL: &str =
    "https://cdn.freecodecamp.org/curriculum/forum-latest/latest.json";
pub const DEFAULT_TOPIC_BASE_URL: &str = "https://forum.freecodecamp.org/t/";
pub const DEFAULT_CATEGORY_BASE_URL: &str = "https://forum.freecodecamp.org/c/";
pub const DEFAULT_AVATAR_CDN_URL: &str = "https://sea1.discourse-cdn.com/freecodecamp";
pub const DEFAULT_AVATAR_SIZE: u32 = 30;

/// Link targets and avatar settings shared by every row of one render pass.
#[derive(Debug, Clone)]
pub struct Site {
    pub topic_base: Url,
    pub category_base: Url,
    pub avatar_cdn: Url,
    pub avatar_size: u32,
}

impl Site {
    pub fn new(topic_base: Url, category_base: Url, avatar_cdn: Url, avatar_size: u32) -> Self {
        Self {
            topic_base: with_trailing_slash(topic_base),
            category_base: with_trailing_slash(category_base),
            avatar_cdn,
            avatar_size,
        }
    }

    pub fn topic_href(&self, slug: &str, id: u64) -> String {
        format!("{}{}/{}", self.topic_base, slug, id)
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(
            Url::parse(DEFAULT_TOPIC_BASE_URL).expect("default topic url"),
            Url::parse(DEFAULT_CATEGORY_BASE_URL).expect("default category url"),
            Url::parse(DEFAULT_AVATAR_CDN_URL).expect("default avatar cdn url"),
            DEFAULT_AVATAR_SIZE,
        )
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
