pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
#[cfg(feature = "fake-backend")]
pub mod fake_backend;
pub mod keyboard;
pub mod notify;
pub mod page;
pub mod render;
pub mod selection;
pub mod sync;
pub mod zoom;

pub use api::{HttpTagApi, TagApi};
pub use catalog::{Catalog, ImageId, Tag};
pub use config::{ClientConfig, ConfigError};
pub use error::{Error, Result};
pub use keyboard::{Command, KeyCode, KeyPress};
pub use notify::{Notice, NoticeLevel, Notifications};
pub use page::GalleryPage;
pub use render::{Badge, Caption, RenderedView};
pub use selection::{Gallery, Selection};
pub use sync::{SyncOutcome, TagSync};
pub use zoom::ZoomOverlay;
