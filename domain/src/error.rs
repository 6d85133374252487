use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Fruit {fruit_id} has no suppliers (index 0 out of bounds)")]
    NoSupplier { fruit_id: i64 },
}
