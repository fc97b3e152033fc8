pub mod geometry;
pub mod layer;
pub mod popup;
