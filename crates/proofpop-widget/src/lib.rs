pub mod controller;
pub mod error;
pub mod headless;
pub mod render;

pub use controller::{ControllerState, WidgetController};
pub use error::WidgetError;
pub use headless::HeadlessAdapter;
pub use render::{RenderAdapter, TextSlot, WidgetRenderer};
