//! Text-generation service port definition.

use crate::domain::AppError;

/// Port for the hosted language model.
///
/// One instruction in, one reply out. Model selection, authentication and
/// transport belong to the implementation.
pub trait TextGenerator {
    /// Generate a reply for `instruction`.
    ///
    /// Transport, authentication and quota failures surface as [`AppError::Service`].
    fn generate(&self, instruction: &str) -> Result<String, AppError>;
}
