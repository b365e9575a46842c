use maud::{Markup, Render, html};
use url::Url;

use crate::feed::{Poster, User};

const RELATIVE_AVATAR_PREFIX: &str = "/user_avatar/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub src: String,
    pub alt: String,
}

/// Resolves one avatar per poster that has a directory entry, in poster order.
/// Posters without a matching user are dropped.
pub fn resolve_avatars(
    posters: &[Poster],
    users: &[User],
    cdn: &Url,
    size: u32,
) -> Vec<Avatar> {
    posters
        .iter()
        .filter_map(|poster| users.iter().find(|user| user.id == poster.user_id))
        .map(|user| Avatar {
            src: avatar_src(&user.avatar_template, cdn, size),
            alt: user.display_name().to_string(),
        })
        .collect()
}

/// Fills the first `{size}` slot and puts site-relative avatar paths on the CDN.
pub fn avatar_src(template: &str, cdn: &Url, size: u32) -> String {
    let path = template.replacen("{size}", &size.to_string(), 1);
    if path.starts_with(RELATIVE_AVATAR_PREFIX) {
        format!("{}{}", cdn.as_str().trim_end_matches('/'), path)
    } else {
        path
    }
}

impl Render for Avatar {
    fn render(&self) -> Markup {
        html! {
            img src=(self.src) alt=(self.alt);
        }
    }
}
