pub mod screen;

pub use screen::{ScreenContext, build_screen_view_model};
