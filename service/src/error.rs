use std::fmt::{Display, Formatter, Result};

use domain::DomainError;
use fruits_api::FruitsApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    NetworkError(String),
    MalformedResponse(String),
    DataShapeError(String),
    ExportError(String),
    IoError(String),
    SettingsError(String),
    InvalidInput(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::NetworkError(message) => write!(f, "Network error: {}", message),
            Error::MalformedResponse(message) => write!(f, "Malformed response: {}", message),
            Error::DataShapeError(message) => write!(f, "Unexpected data: {}", message),
            Error::ExportError(message) => write!(f, "Export error: {}", message),
            Error::IoError(message) => write!(f, "IO error: {}", message),
            Error::SettingsError(message) => write!(f, "Settings error: {}", message),
            Error::InvalidInput(message) => write!(f, "Invalid input: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<FruitsApiError> for Error {
    fn from(err: FruitsApiError) -> Self {
        match err {
            FruitsApiError::RequestFailed(_) | FruitsApiError::HttpStatus(_) => {
                Error::NetworkError(err.to_string())
            }
            FruitsApiError::InvalidUrl(_) => Error::SettingsError(err.to_string()),
            FruitsApiError::MalformedResponse(_) => Error::MalformedResponse(err.to_string()),
        }
    }
}

impl From<DomainError> for Error {
    fn from(err: DomainError) -> Self {
        Error::DataShapeError(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::ExportError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_map_to_taxonomy() {
        assert!(matches!(
            Error::from(FruitsApiError::HttpStatus(500)),
            Error::NetworkError(_)
        ));
        assert!(matches!(
            Error::from(FruitsApiError::RequestFailed("refused".into())),
            Error::NetworkError(_)
        ));
        assert!(matches!(
            Error::from(FruitsApiError::MalformedResponse("eof".into())),
            Error::MalformedResponse(_)
        ));
        assert!(matches!(
            Error::from(FruitsApiError::InvalidUrl("x".into())),
            Error::SettingsError(_)
        ));
    }

    #[test]
    fn test_missing_supplier_is_a_data_shape_error() {
        let err = Error::from(DomainError::NoSupplier { fruit_id: 4 });
        assert_eq!(
            err.to_string(),
            "Unexpected data: Fruit 4 has no suppliers (index 0 out of bounds)"
        );
    }
}
