use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("an overlay is already live; dismiss it before rendering again")]
    AlreadyRendered,
}
