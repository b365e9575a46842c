use maud::{Markup, Render, html};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub style_tag: &'static str,
}

pub const GENERAL: Category = Category {
    name: "General",
    style_tag: "general",
};

const KNOWN_CATEGORIES: [(i64, Category); 8] = [
    (299, Category { name: "Career Advice", style_tag: "career" }),
    (409, Category { name: "Project Feedback", style_tag: "feedback" }),
    (417, Category { name: "freeCodeCamp Support", style_tag: "support" }),
    (421, Category { name: "JavaScript", style_tag: "javascript" }),
    (423, Category { name: "HTML - CSS", style_tag: "html-css" }),
    (424, Category { name: "Python", style_tag: "python" }),
    (432, Category { name: "You Can Do This!", style_tag: "motivation" }),
    (560, Category { name: "Backend Development", style_tag: "backend" }),
];

/// Never fails: ids missing from the table map to [`GENERAL`].
pub fn resolve_category(id: i64) -> Category {
    KNOWN_CATEGORIES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, category)| *category)
        .unwrap_or(GENERAL)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub href: String,
    pub text: &'static str,
    pub class: String,
}

/// Builds the badge link for a topic's category. The raw id is kept in the URL
/// even when it fell back to the general category.
pub fn category_link(category_base: &Url, id: i64) -> CategoryLink {
    let category = resolve_category(id);
    CategoryLink {
        href: format!("{}{}/{}", category_base, category.style_tag, id),
        text: category.name,
        class: format!("category {}", category.style_tag),
    }
}

impl Render for CategoryLink {
    fn render(&self) -> Markup {
        html! {
            a href=(self.href) class=(self.class) target="_blank" { (self.text) }
        }
    }
}
