use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Empty query")]
    EmptyQuery,

    #[error("Pokémon not found: {query}")]
    SearchMiss { query: String },
}
