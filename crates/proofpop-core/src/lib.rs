pub mod payload;
pub mod text;
pub mod timefmt;
pub mod validate;

pub use payload::{
    AttributionEvent, DisplayMode, OverlayLocation, PageType, ViewerContext, WidgetPayload,
};
pub use text::{compose_widget_text, WidgetText};
pub use timefmt::{RelativeTime, TimeUnit};
pub use validate::validate;
