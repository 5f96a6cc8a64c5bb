pub mod image_loading;
pub mod navigation;
pub mod state;

pub use state::*;
