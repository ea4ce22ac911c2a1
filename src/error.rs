use thiserror::Error;

pub type OverlayResult<T> = Result<T, OverlayError>;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: i32, height: i32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid value specifier `{specifier}`: {reason}")]
    InvalidSpecifier {
        specifier: String,
        reason: &'static str,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
