use tagquick_core::ZoomOverlay;

/// Repeated ids are counted separately, so `zoom a.png a.png` is two images.
pub fn run(images: &[String]) {
    let mut zoom = ZoomOverlay::new();
    if zoom.toggle_zoom_in(images) {
        println!("{}", zoom.image_src().unwrap_or_default());
    } else {
        eprintln!("Zoom needs exactly one image (got {})", images.len());
    }
}
