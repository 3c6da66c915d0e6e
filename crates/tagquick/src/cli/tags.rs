use anyhow::Result;
use console::style;
use tagquick_core::{TagApi, TagSync};

pub async fn run<A: TagApi>(api: A) -> Result<()> {
    let sync = TagSync::new(api);
    sync.load().await?;
    let catalog = sync.catalog().await;

    if catalog.all_tags.is_empty() {
        eprintln!("No tags defined on the server");
        return Ok(());
    }

    println!("Tags:");
    for (i, tag) in catalog.all_tags.iter().enumerate() {
        let shortcut = if i < 9 {
            format!("ctrl+{}", i + 1)
        } else {
            "-".to_string()
        };
        println!("  {:<7} {}", shortcut, style(tag).cyan());
    }

    let tagged: Vec<_> = catalog
        .targets
        .iter()
        .filter(|(_, tags)| !tags.is_empty())
        .collect();
    if tagged.is_empty() {
        eprintln!("No images tagged yet");
        return Ok(());
    }

    println!("Images:");
    for (image, tags) in tagged {
        println!("  {image}: {}", tags.join(", "));
    }

    Ok(())
}
