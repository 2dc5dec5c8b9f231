use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Phone number must contain 10 digits: '{value}'")]
    InvalidPhone { value: String },

    #[error("Phone number '{phone}' does not exist in this record.")]
    PhoneNotFound { phone: String },

    #[error("Contact not found: {name}")]
    ContactNotFound { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BookResult<T> = Result<T, BookError>;
