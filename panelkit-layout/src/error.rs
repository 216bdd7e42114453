use panelkit_style::PanelkitStyleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelkitLayoutError {
    #[error("Invalid spine: `{0}` (expected one of: top, bottom, left, right)")]
    InvalidSpine(String),

    #[error("Invalid axis: `{0}` (expected one of: x, y)")]
    InvalidAxis(String),

    #[error("Style error: `{0}`")]
    StyleError(#[from] PanelkitStyleError),
}
