use thiserror::Error;

#[derive(Debug, Error)]
pub enum MondoApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Invalid REST response: {0}")]
    RestResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Could not initialize renderer client: {0}")]
    Initialization(String),
    #[error("Could not reach the renderer: {0}")]
    RequestError(String),
    #[error("Renderer failed. Error {status}. {message}")]
    RenderFailed { status: u16, message: String },
    #[error("Could not deserialize renderer response: {0}")]
    JsonError(String),
}
