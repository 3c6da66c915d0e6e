use anyhow::Result;
use console::style;
use tagquick_core::{Catalog, Gallery, GalleryPage, KeyPress, TagApi, TagSync};

use super::fail_on_notices;

pub async fn run_toggle<A: TagApi>(api: A, tag: &str, images: &[String]) -> Result<()> {
    let sync = TagSync::new(api);
    sync.toggle(tag, images).await?;

    eprintln!("Toggled '{tag}' on {} image(s)", images.len());
    print_targets(&sync.catalog().await, images);
    Ok(())
}

/// Same as pressing Ctrl+`number` with `images` selected
pub async fn run_shortcut<A: TagApi>(api: A, number: u8, images: &[String]) -> Result<()> {
    let mut page = GalleryPage::new(api, Gallery::new(images.iter().cloned()));
    page.ready().await;
    fail_on_notices(&mut page)?;

    page.select_all();
    if !page.key_down(KeyPress::ctrl_digit(number)).await {
        let known = page.view().tag_list.len();
        eprintln!("No tag bound to ctrl+{number} ({known} tags known)");
        return Ok(());
    }
    fail_on_notices(&mut page)?;

    print_targets(&page.sync().catalog().await, images);
    Ok(())
}

fn print_targets(catalog: &Catalog, images: &[String]) {
    for image in images {
        let tags = catalog.tags_for(image);
        if tags.is_empty() {
            println!("{image}: {}", style("(no tags)").dim());
        } else {
            println!("{image}: {}", tags.join(", "));
        }
    }
}
