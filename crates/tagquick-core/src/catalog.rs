use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Name of a tag, unique among the known tags
pub type Tag = String;

/// Opaque image identifier, the file name as served under `/imgs/`
pub type ImageId = String;

/// Full tag state as returned by every tag API call
///
/// `all_tags` is ordered by the server; a tag's position in it is the
/// badge index used when rendering. The server is authoritative for both
/// fields, so a catalog is always replaced wholesale, never patched.
/// A `null` where a tag list is expected reads as no tags.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub all_tags: Vec<Tag>,
    #[serde_as(as = "DefaultOnNull<BTreeMap<_, DefaultOnNull>>")]
    #[serde(default)]
    pub targets: BTreeMap<ImageId, Vec<Tag>>,
}

impl Catalog {
    pub fn new(all_tags: Vec<Tag>) -> Self {
        Self {
            all_tags,
            targets: BTreeMap::new(),
        }
    }

    /// Builder-style assignment, mostly useful for tests and fixtures
    #[must_use]
    pub fn with_target(mut self, image: impl Into<ImageId>, tags: &[&str]) -> Self {
        self.targets
            .insert(image.into(), tags.iter().map(|t| (*t).to_string()).collect());
        self
    }

    /// Tags applied to an image; images missing from `targets` have none
    pub fn tags_for(&self, image: &str) -> &[Tag] {
        self.targets.get(image).map_or(&[], Vec::as_slice)
    }

    /// Position of a tag in `all_tags`
    pub fn index_of(&self, tag: &str) -> Option<usize> {
        self.all_tags.iter().position(|t| t == tag)
    }

    /// The Nth known tag, 1-based as on the keyboard shortcuts
    pub fn nth_tag(&self, n: usize) -> Option<&Tag> {
        n.checked_sub(1).and_then(|i| self.all_tags.get(i))
    }

    pub fn has_tag(&self, image: &str, tag: &str) -> bool {
        self.tags_for(image).iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.all_tags.is_empty() && self.targets.is_empty()
    }
}

/// Request body of `PUT /api/tags/{tag}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub targets: Vec<ImageId>,
}
