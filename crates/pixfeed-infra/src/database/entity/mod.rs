//! SeaORM entities.

pub mod published_image;
