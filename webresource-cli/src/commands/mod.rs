//! CLI command implementations.

pub mod describe;
pub mod init;
pub mod render;

pub use describe::describe_file;
pub use init::init_project;
pub use render::{render_file, RenderOptions};
