//! A LIFO stack with an optional capacity bound.
//!
//! ## Usage
//!
//! ```
//! use lifo_stack::{BoundedStack, Error};
//!
//! let mut stack = BoundedStack::new(vec![1, 2], Some(3))?;
//! stack.push(3)?;
//! assert_eq!(stack.push(4), Err(Error::CapacityExceeded { capacity: 3 }));
//! assert_eq!(stack.pop()?, 3);
//! assert_eq!(stack.peek()?, &2);
//! # Ok::<(), Error>(())
//! ```
pub mod error;
pub mod stack;

pub use error::{Error, Result};
pub use stack::BoundedStack;
