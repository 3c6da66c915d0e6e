use std::collections::HashSet;

use crate::catalog::ImageId;

/// Source of the images the user currently has selected
pub trait Selection {
    /// Selected images in display order, computed at call time
    fn current(&self) -> Vec<ImageId>;

    fn len(&self) -> usize {
        self.current().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Selection for [ImageId] {
    fn current(&self) -> Vec<ImageId> {
        self.to_vec()
    }
}

impl Selection for Vec<ImageId> {
    fn current(&self) -> Vec<ImageId> {
        self.clone()
    }
}

/// Thumbnails on the current page and which of them are selected
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    displayed: Vec<ImageId>,
    selected: HashSet<ImageId>,
}

impl Gallery {
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ImageId>,
    {
        let mut displayed: Vec<ImageId> = Vec::new();
        for image in images {
            let image = image.into();
            if !displayed.contains(&image) {
                displayed.push(image);
            }
        }
        Self {
            displayed,
            selected: HashSet::new(),
        }
    }

    pub fn displayed(&self) -> &[ImageId] {
        &self.displayed
    }

    pub fn is_displayed(&self, image: &str) -> bool {
        self.displayed.iter().any(|i| i == image)
    }

    pub fn is_selected(&self, image: &str) -> bool {
        self.selected.contains(image)
    }

    /// Replace the selection, as when a drag-select finishes
    ///
    /// Returns the new selection count. Ids not on the page are ignored.
    pub fn select<I, S>(&mut self, images: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selected = images
            .into_iter()
            .filter(|i| self.is_displayed(i.as_ref()))
            .map(|i| i.as_ref().to_string())
            .collect();
        self.selected_count()
    }

    /// Flip one thumbnail; returns whether it is now selected
    pub fn toggle(&mut self, image: &str) -> bool {
        if !self.is_displayed(image) {
            return false;
        }
        if self.selected.remove(image) {
            false
        } else {
            self.selected.insert(image.to_string());
            true
        }
    }

    pub fn select_all(&mut self) -> usize {
        self.selected = self.displayed.iter().cloned().collect();
        self.selected_count()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}

impl Selection for Gallery {
    fn current(&self) -> Vec<ImageId> {
        self.displayed
            .iter()
            .filter(|i| self.selected.contains(i.as_str()))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.selected_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Gallery {
        Gallery::new(["a.png", "b.png", "c.png"])
    }

    #[test]
    fn test_new_drops_duplicates() {
        let gallery = Gallery::new(["a.png", "b.png", "a.png"]);
        assert_eq!(gallery.displayed(), ["a.png".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn test_select_replaces_and_counts() {
        let mut gallery = gallery();

        assert_eq!(gallery.select(["a.png", "b.png"]), 2);
        assert_eq!(gallery.select(["c.png"]), 1);
        assert!(!gallery.is_selected("a.png"));
        assert_eq!(gallery.current(), vec!["c.png".to_string()]);
    }

    #[test]
    fn test_select_ignores_images_not_on_page() {
        let mut gallery = gallery();
        assert_eq!(gallery.select(["a.png", "elsewhere.png"]), 1);
    }

    #[test]
    fn test_current_is_in_display_order() {
        let mut gallery = gallery();
        gallery.select(["c.png", "a.png"]);
        assert_eq!(gallery.current(), vec!["a.png".to_string(), "c.png".to_string()]);
    }

    #[test]
    fn test_select_all() {
        let mut gallery = gallery();
        assert_eq!(gallery.select_all(), 3);
        assert_eq!(gallery.current().len(), 3);
        assert_eq!(Selection::len(&gallery), 3);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut gallery = gallery();

        assert!(gallery.toggle("b.png"));
        assert!(gallery.is_selected("b.png"));
        assert!(!gallery.toggle("b.png"));
        assert!(!gallery.toggle("missing.png"));

        gallery.select_all();
        gallery.clear();
        assert!(Selection::is_empty(&gallery));
    }

    #[test]
    fn test_vec_is_a_selection() {
        let picked = vec!["x.png".to_string()];
        assert_eq!(picked.current(), picked);
        assert_eq!(Selection::len(&picked), 1);
    }
}
