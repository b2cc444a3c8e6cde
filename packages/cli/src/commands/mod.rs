pub mod render;
pub mod topics;

pub use render::{render, RenderArgs};
pub use topics::{topics, TopicsArgs};
