use thiserror::Error;

pub type BrushResult<T> = Result<T, BrushError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BrushError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset must contain at least one record")]
    EmptyDataset,

    #[error("duplicate series name `{0}`")]
    DuplicateSeriesName(String),

    #[error("series `{series}` has no value for category `{category}`")]
    MissingCategoryValue { series: String, category: String },

    /// Pointer coincides with the anchor, so no wedge direction exists.
    #[error("pointer coincides with the selection anchor")]
    DegenerateVector,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("plugin with id `{0}` is already registered")]
    DuplicatePlugin(String),
}
