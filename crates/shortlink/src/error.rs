use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortLinkError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortLinkError {
    #[error("Instance id {id} does not fit in a {max_len}-symbol slug")]
    EncodingOverflow { id: u64, max_len: usize },
}
