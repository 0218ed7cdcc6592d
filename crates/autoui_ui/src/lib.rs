pub mod chrome;
pub mod console;
pub mod errors;
pub mod render;

pub use chrome::*;
pub use console::*;
pub use errors::*;
pub use render::*;
