//! CLI command implementations

mod read;
mod render;
mod toc;

pub use read::read;
pub use render::render;
pub use toc::toc;
