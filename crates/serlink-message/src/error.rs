/// Errors from interacting with a decoded message.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// A payload view was requested for a variant other than the decoded tag.
    #[error("wrong variant access (requested {expected}, message is {actual})")]
    WrongVariant {
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, MessageError>;
