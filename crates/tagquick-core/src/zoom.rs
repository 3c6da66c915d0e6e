use crate::catalog::ImageId;

/// Full-size view of a single selected image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomOverlay {
    visible: bool,
    image_src: Option<String>,
    label: Option<String>,
}

impl ZoomOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay on the selected image, or close it if already open
    ///
    /// Returns `true` only when the overlay was opened. Closing it, or a
    /// selection of anything but exactly one image, returns `false`; the
    /// latter leaves the overlay untouched.
    pub fn toggle_zoom_in(&mut self, selection: &[ImageId]) -> bool {
        if self.visible {
            self.visible = false;
            return false;
        }

        let [image] = selection else {
            return false;
        };

        self.image_src = Some(image_src(image));
        self.label = Some(image.clone());
        self.visible = true;
        true
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Source of the zoomed image, kept after the overlay is hidden
    pub fn image_src(&self) -> Option<&str> {
        self.image_src.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Path the gallery server serves an image under
pub fn image_src(image: &str) -> String {
    format!("/imgs/{image}")
}
