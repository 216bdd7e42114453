use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelkitStyleError {
    #[error("Invalid medium: `{0}` (expected one of: web, pdf)")]
    InvalidMedium(String),

    #[error("Unknown text element: `{0}`")]
    UnknownElement(String),

    #[error("Unknown color: `{0}`")]
    UnknownColor(String),

    #[error("Invalid hex color: `{0}`")]
    InvalidColor(String),

    #[error("Invalid style options: `{0}`")]
    OptionsError(#[from] serde_json::Error),
}
