use thiserror::Error;

/// Rejections raised while importing a FEN string. Setup must consume all
/// six fields; any malformed field aborts the import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected 6 FEN fields, found {0}")]
    FieldCount(usize),

    #[error("malformed placement field: {0}")]
    Placement(String),

    #[error("unknown side-to-move token `{0}`")]
    SideToMove(String),

    #[error("malformed castling field `{0}`")]
    Castling(String),

    #[error("invalid en-passant square `{0}`")]
    EnPassant(String),

    #[error("invalid clock field `{0}`")]
    Clock(String),
}

/// Fatal misuse of the make/unmake discipline. Not recoverable: a caller
/// that unmakes more than it made has already corrupted its own pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("unmake_move called with empty history")]
    EmptyHistory,
}
