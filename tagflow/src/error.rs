//! Layout error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A measurement was negative or not finite. `index` is `None` for the
    /// "more" indicator.
    #[error("invalid measurement for {}: {field} = {value}", describe_slot(.index))]
    InvalidMeasurement {
        index: Option<usize>,
        field: &'static str,
        value: f32,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("items overflow the row cap but no indicator item was supplied")]
    MissingIndicator,

    #[error("measurement pass {attempted} requested; at most two passes are allowed")]
    PassLimitExceeded { attempted: u8 },
}

fn describe_slot(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("item {}", i),
        None => "indicator".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
