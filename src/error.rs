use thiserror::Error;

pub type RegistryResult<T> = core::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid due date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("no plant registered under '{0}'")]
    PlantNotFound(String),
    #[error("no profile with username '{0}'")]
    ProfileNotFound(String),
}
