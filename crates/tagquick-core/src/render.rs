//! Badge markup for the tag list and the thumbnail captions.
//!
//! Rendering is a pure function of a [`Catalog`] and the images currently on
//! the page. A badge's class is derived from the tag's position in
//! `all_tags`, not from a stable id: if the server reorders its tags, every
//! badge on every image changes color.

use std::fmt::Write as _;

use crate::catalog::{Catalog, ImageId, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub tag: Tag,
    /// Position in `all_tags`, `None` when the server assigned a tag it no
    /// longer lists
    pub index: Option<usize>,
}

impl Badge {
    pub fn css_class(&self) -> String {
        match self.index {
            Some(i) => format!("badge badge-{i}"),
            None => "badge badge-unknown".to_string(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<span class="{}">{}</span>"#,
            self.css_class(),
            html_escape(&self.tag)
        )
    }
}

/// Badges shown in one thumbnail's caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub image: ImageId,
    pub badges: Vec<Badge>,
}

impl Caption {
    pub fn to_html(&self) -> String {
        badges_html(&self.badges)
    }
}

/// Everything the page shows that depends on tag state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    pub tag_list: Vec<Badge>,
    /// One caption per displayed image, in display order
    pub captions: Vec<Caption>,
}

impl RenderedView {
    pub fn tag_list_html(&self) -> String {
        badges_html(&self.tag_list)
    }

    pub fn caption(&self, image: &str) -> Option<&Caption> {
        self.captions.iter().find(|c| c.image == image)
    }

    pub fn caption_html(&self, image: &str) -> Option<String> {
        self.caption(image).map(Caption::to_html)
    }
}

/// Render the tag list and a caption for every displayed image
pub fn render(catalog: &Catalog, displayed: &[ImageId]) -> RenderedView {
    let badge = |tag: &Tag| Badge {
        tag: tag.clone(),
        index: catalog.index_of(tag),
    };

    RenderedView {
        tag_list: catalog.all_tags.iter().map(badge).collect(),
        captions: displayed
            .iter()
            .map(|image| Caption {
                image: image.clone(),
                badges: catalog.tags_for(image).iter().map(badge).collect(),
            })
            .collect(),
    }
}

fn badges_html(badges: &[Badge]) -> String {
    badges.iter().fold(String::new(), |mut html, b| {
        let _ = write!(html, "{}", b.to_html());
        html
    })
}

pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
