use thiserror::Error;

/// Why a string is not a valid tile code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileCodeError {
    #[error("tile code must be two characters: {code:?}")]
    Length { code: String },

    #[error("invalid tile digit: {digit:?}")]
    Digit { digit: char },

    #[error("unknown suit marker: {marker:?} (expected m, p, s or z)")]
    Suit { marker: char },

    #[error("honor digit out of range: {digit} (expected 1..=7)")]
    HonorRange { digit: u8 },

    #[error("\"00\" is the hidden-tile sentinel, not a tile")]
    Hidden,
}

#[cfg(test)]
mod tests {
    use super::TileCodeError;

    #[test]
    fn messages_name_the_offending_part() {
        assert_eq!(
            TileCodeError::Suit { marker: 'q' }.to_string(),
            "unknown suit marker: 'q' (expected m, p, s or z)"
        );
        assert_eq!(
            TileCodeError::Length {
                code: "1234".to_string()
            }
            .to_string(),
            "tile code must be two characters: \"1234\""
        );
    }
}
