//! Undo/redo history over two [BoundedStack](stack::BoundedStack)s.
//!
//! ## Usage
//!
//! ```
//! use lifo_history::{Error, HistoryManager};
//!
//! let mut history = HistoryManager::new();
//! history.push_action("A")?;
//! history.push_action("B")?;
//!
//! assert_eq!(history.undo()?, &"B");
//! assert_eq!(history.undo()?, &"A");
//! assert_eq!(history.undo(), Err(Error::NothingToUndo));
//! assert_eq!(history.redo()?, &"A");
//!
//! let (undo, redo) = history.snapshot();
//! assert_eq!(undo, ["A"]);
//! assert_eq!(redo, ["B"]);
//! # Ok::<(), Error>(())
//! ```
pub mod error;
pub mod history;

pub use error::{Error, Result};
pub use history::{HistoryManager, Options};
