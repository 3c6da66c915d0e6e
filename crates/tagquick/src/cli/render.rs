use anyhow::Result;
use tagquick_core::{Gallery, GalleryPage, TagApi};

use super::fail_on_notices;

/// Print the markup the gallery page would show for `images`
pub async fn run<A: TagApi>(api: A, images: &[String]) -> Result<()> {
    let mut page = GalleryPage::new(api, Gallery::new(images.iter().cloned()));
    page.ready().await;
    fail_on_notices(&mut page)?;

    let view = page.view();
    println!("{}", view.tag_list_html());
    for caption in &view.captions {
        println!("{}\t{}", caption.image, caption.to_html());
    }

    Ok(())
}
