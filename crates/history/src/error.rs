#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    /// A bounded undo or redo stack has no room for the action.
    #[error(transparent)]
    Stack(#[from] stack::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
