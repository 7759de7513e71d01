pub mod actions;
pub mod render;
pub mod resolver;
pub mod style;

pub use actions::{Effect, resolve_action};
pub use render::{CardClick, RenderBackend, RenderContext, ScreenRequests, render};
pub use resolver::find_screen;
pub use style::{Color, ContentScale, ResolvedStyle, Shadow, TextAlign, resolve_modifiers};
