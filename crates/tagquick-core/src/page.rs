use crate::api::TagApi;
use crate::catalog::ImageId;
use crate::keyboard::{self, Command, KeyPress};
use crate::notify::{Notice, Notifications};
use crate::render::RenderedView;
use crate::selection::{Gallery, Selection};
use crate::sync::{SyncOutcome, TagSync};
use crate::zoom::ZoomOverlay;

/// The gallery page: one owner for tag sync, selection, zoom and notices
///
/// UI events arrive here one at a time. Tag requests go through [`TagSync`],
/// whose responses re-render every displayed thumbnail when applied.
pub struct GalleryPage<A> {
    sync: TagSync<A>,
    gallery: Gallery,
    zoom: ZoomOverlay,
    notices: Notifications,
    view: RenderedView,
}

impl<A: TagApi> GalleryPage<A> {
    pub fn new(api: A, gallery: Gallery) -> Self {
        Self {
            sync: TagSync::new(api),
            gallery,
            zoom: ZoomOverlay::new(),
            notices: Notifications::default(),
            view: RenderedView::default(),
        }
    }

    /// Initial catalog load once the page is up
    pub async fn ready(&mut self) -> Option<SyncOutcome> {
        let result = self.sync.load().await;
        self.finish("Loading tags", result).await
    }

    /// A drag-select finished; returns the count shown next to the gallery
    pub fn selection_stopped<I, S>(&mut self, images: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.gallery.select(images)
    }

    pub fn select_all(&mut self) -> usize {
        self.gallery.select_all()
    }

    /// Handle a key press; returns whether the browser default should be
    /// suppressed
    pub async fn key_down(&mut self, key: KeyPress) -> bool {
        let known = self.sync.all_tags().await;
        match keyboard::dispatch(key, &known) {
            Some(Command::ToggleZoom) => self.toggle_zoom_in(),
            Some(Command::ToggleTag(tag)) => {
                self.toggle_tag(&tag).await;
                true
            }
            None => false,
        }
    }

    pub fn toggle_zoom_in(&mut self) -> bool {
        let selection = self.gallery.current();
        self.zoom.toggle_zoom_in(&selection)
    }

    /// Flip `tag` on whatever is selected right now
    pub async fn toggle_tag(&mut self, tag: &str) -> Option<SyncOutcome> {
        let targets = self.gallery.current();
        let result = self.sync.toggle(tag, &targets).await;
        self.finish(&format!("Toggling {tag}"), result).await
    }

    async fn finish(
        &mut self,
        action: &str,
        result: crate::Result<SyncOutcome>,
    ) -> Option<SyncOutcome> {
        match result {
            Ok(outcome) => {
                if outcome.is_applied() {
                    self.view = self.sync.render(self.gallery.displayed()).await;
                }
                Some(outcome)
            }
            Err(e) => {
                self.notices.push(Notice::from_error(action, &e));
                None
            }
        }
    }

    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    pub fn selection_count(&self) -> usize {
        self.gallery.selected_count()
    }

    pub fn selection(&self) -> Vec<ImageId> {
        self.gallery.current()
    }

    pub const fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub const fn zoom(&self) -> &ZoomOverlay {
        &self.zoom
    }

    pub const fn sync(&self) -> &TagSync<A> {
        &self.sync
    }

    pub fn notices(&mut self) -> &mut Notifications {
        &mut self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::keyboard::KeyCode;
    use crate::sync::tests::GatedApi;
    use crate::Error;

    fn catalog(tags: &[&str]) -> Catalog {
        Catalog::new(tags.iter().map(|t| (*t).to_string()).collect())
    }

    fn page(api: GatedApi) -> GalleryPage<GatedApi> {
        GalleryPage::new(api, Gallery::new(["a.png", "b.png", "c.png"]))
    }

    #[tokio::test]
    async fn test_ready_renders_every_displayed_image() {
        let api = GatedApi::default();
        api.gate()
            .send(Ok(catalog(&["red", "green"]).with_target("b.png", &["green"])))
            .unwrap();
        let mut page = page(api);

        assert_eq!(page.ready().await, Some(SyncOutcome::Applied));
        assert_eq!(page.view().captions.len(), 3);
        assert!(page.view().caption("a.png").unwrap().badges.is_empty());
        assert_eq!(
            page.view().caption_html("b.png").unwrap(),
            r#"<span class="badge badge-1">green</span>"#
        );
    }

    #[tokio::test]
    async fn test_load_twice_renders_identically() {
        let api = GatedApi::default();
        let response = catalog(&["red"]).with_target("a.png", &["red"]);
        api.gate().send(Ok(response.clone())).unwrap();
        api.gate().send(Ok(response)).unwrap();
        let mut page = page(api);

        page.ready().await;
        let first = page.view().clone();
        page.ready().await;

        assert_eq!(page.view(), &first);
    }

    #[tokio::test]
    async fn test_ctrl_digit_toggles_current_selection() {
        let api = GatedApi::default();
        api.gate().send(Ok(catalog(&["red", "green"]))).unwrap();
        api.gate()
            .send(Ok(catalog(&["red", "green"])
                .with_target("a.png", &["green"])
                .with_target("c.png", &["green"])))
            .unwrap();
        let mut page = page(api);
        page.ready().await;

        page.selection_stopped(["c.png", "a.png"]);
        assert!(page.key_down(KeyPress::ctrl_digit(2)).await);

        let calls = page.sync().api().calls.lock().unwrap().clone();
        assert_eq!(
            calls[1],
            ("green".to_string(), vec!["a.png".to_string(), "c.png".to_string()])
        );
        assert_eq!(page.view().caption("c.png").unwrap().badges.len(), 1);
    }

    #[tokio::test]
    async fn test_shortcut_past_known_tags_makes_no_call() {
        let api = GatedApi::default();
        api.gate().send(Ok(catalog(&["red", "green", "blue"]))).unwrap();
        let mut page = page(api);
        page.ready().await;
        page.select_all();

        for n in 4..=9 {
            assert!(!page.key_down(KeyPress::ctrl_digit(n)).await);
        }

        assert_eq!(page.sync().api().calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_shortcuts_inert_before_any_tags() {
        let api = GatedApi::default();
        api.gate().send(Ok(Catalog::default())).unwrap();
        let mut page = page(api);
        page.ready().await;
        page.select_all();

        assert!(page.view().tag_list.is_empty());
        for n in 1..=9 {
            assert!(!page.key_down(KeyPress::ctrl_digit(n)).await);
        }
        assert_eq!(page.sync().api().calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_space_zooms_single_selection() {
        let mut page = page(GatedApi::default());

        assert_eq!(page.selection_stopped(["b.png"]), 1);
        assert!(page.key_down(KeyPress::space()).await);
        assert_eq!(page.zoom().image_src(), Some("/imgs/b.png"));

        assert!(!page.key_down(KeyPress::space()).await);
        assert!(!page.zoom().is_visible());
    }

    #[tokio::test]
    async fn test_space_with_two_selected_does_nothing() {
        let mut page = page(GatedApi::default());
        page.selection_stopped(["a.png", "b.png"]);

        assert!(!page.key_down(KeyPress::new(KeyCode::Space)).await);
        assert_eq!(page.zoom(), &ZoomOverlay::new());
        assert!(page.notices().is_empty());
    }

    #[tokio::test]
    async fn test_failed_toggle_notifies_and_keeps_view() {
        let api = GatedApi::default();
        api.gate().send(Ok(catalog(&["red"]).with_target("a.png", &["red"]))).unwrap();
        api.gate()
            .send(Err(Error::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
                url: "http://localhost:8887/api/tags/red/".into(),
            }))
            .unwrap();
        let mut page = page(api);
        page.ready().await;
        let before = page.view().clone();

        page.selection_stopped(["a.png"]);
        assert_eq!(page.toggle_tag("red").await, None);

        assert_eq!(page.view(), &before);
        let notices = page.notices().drain();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.starts_with("Toggling red failed"));
    }

    #[tokio::test]
    async fn test_select_all_counts_every_thumbnail() {
        let mut page = page(GatedApi::default());
        assert_eq!(page.select_all(), 3);
        assert_eq!(page.selection_count(), 3);
        assert_eq!(page.selection().len(), 3);
    }
}
