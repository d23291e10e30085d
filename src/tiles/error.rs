use super::constants::REGISTER_OPERATION;

/// Error type for tile registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileRegistryError {
    /// The descriptor had no name, or an empty one
    MissingName { operation: &'static str },
}

impl TileRegistryError {
    pub fn missing_name() -> Self {
        TileRegistryError::MissingName {
            operation: REGISTER_OPERATION,
        }
    }

    /// Text meant for on-screen display. Always derived from the message.
    pub fn shout(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for TileRegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileRegistryError::MissingName { operation } => {
                write!(f, "{}(new_tile): new_tile.name attribute missing.", operation)
            }
        }
    }
}

impl std::error::Error for TileRegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_message() {
        let err = TileRegistryError::missing_name();
        let message = "TileRegistry::register(new_tile): new_tile.name attribute missing.";
        assert_eq!(err.to_string(), message);
        assert_eq!(err.shout(), message);
    }
}
