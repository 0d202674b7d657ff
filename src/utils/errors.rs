use thiserror::Error;

/// `ExperimentError` enumerates all possible errors returned by probsim
#[derive(Error, Debug)]
pub enum ExperimentError {
    /// Represents a trial or roll count that is zero or negative
    #[error("Please enter a positive integer.")]
    NonPositiveCount,

    /// Represents a door outside of the three doors of the game
    #[error("Door {0} does not exist, doors are numbered 1, 2, or 3")]
    InvalidDoor(usize),

    /// Represents a game action requested in the wrong phase of the game
    #[error("The game cannot accept this action in its current phase")]
    InvalidGameState,

    /// Represents a door layout where the host has no goat door to open
    #[error("The host has no goat door to open")]
    NoRevealableDoor,

    /// Represents a card rank that never occurs in a standard deck
    #[error("Rank {0} does not occur in the deck, ranks are 1 to 13")]
    TargetNotInDeck(u8),

    /// Represents a card position beyond the end of the deck
    #[error("Position {0} is beyond the end of the 52 card deck")]
    PositionOutOfDeck(usize),

    /// Represents a uniform distribution configured with an empty range
    #[error("A uniform distribution requires min < max")]
    EmptyRange,

    /// Represents an estimate requested from a sample without any points
    #[error("An estimate was requested from an empty sample")]
    EmptySample,

    /// Represents a sample whose success count exceeds its trial count, or
    /// whose observed and expected bins do not line up
    #[error("The sample counts are inconsistent")]
    InconsistentSample,

    /// Represents a failed conversion to num-traits Float
    #[error("Failed to convert to a Float value")]
    FloatConvError,

    /// Transparent console I/O errors
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Transparent serde_json errors
    #[error(transparent)]
    JSONError(#[from] serde_json::error::Error),

    /// Transparent serde_yaml errors
    #[error(transparent)]
    YAMLError(#[from] serde_yaml::Error),
}
