//! Domain entities - the core business objects.

mod published_image;

pub use published_image::{GeneratedImage, NewPublishedImage, PublishedImage};
