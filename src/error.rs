pub type ScrollbookResult<T> = Result<T, ScrollbookError>;

#[derive(thiserror::Error, Debug)]
pub enum ScrollbookError {
    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollbookError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ScrollbookError::config("x")
                .to_string()
                .contains("config error:")
        );
        assert!(
            ScrollbookError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ScrollbookError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
