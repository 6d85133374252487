pub mod fruit;
pub mod view_kind;

pub use fruit::{AllData, BasicFruit, ExtendedFruit, NutritionalInfo, Supplier};
pub use view_kind::{PageSize, ViewKind};

#[derive(Debug, Clone, PartialEq)]
pub enum CoreTypeError {
    ConversionError(String),
}

impl std::fmt::Display for CoreTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreTypeError::ConversionError(msg) => write!(f, "Conversion Error: {}", msg),
        }
    }
}
