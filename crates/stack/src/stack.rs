use std::fmt;

use crate::error::{Error, Result};

/// LIFO stack with an optional capacity.
///
/// The top of the stack is the last element of [BoundedStack::as_slice]. Elements only leave the
/// stack through [BoundedStack::pop] or [BoundedStack::clear], and every boundary condition is
/// reported as an [Error] rather than truncating or overwriting.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    inner: Vec<T>,
    capacity: Option<usize>,
}

impl<T> BoundedStack<T> {
    /// Create a stack pre-loaded with `initial` (base first) and an optional capacity.
    ///
    /// Fails with [Error::Config] if `capacity` does not fit a `usize` (negative or too large), or
    /// with [Error::CapacityExceeded] if `initial` holds more elements than `capacity`. A bounded
    /// stack reads at most `capacity + 1` items from `initial`.
    pub fn new<C>(initial: impl IntoIterator<Item = T>, capacity: Option<C>) -> Result<Self>
    where
        C: TryInto<usize> + Copy + fmt::Display,
    {
        let capacity = capacity.map(checked_capacity).transpose()?;
        let inner: Vec<T> = match capacity {
            // One item past the capacity is enough to reject the input.
            Some(capacity) => initial
                .into_iter()
                .take(capacity.saturating_add(1))
                .collect(),
            None => initial.into_iter().collect(),
        };
        if let Some(capacity) = capacity {
            if inner.len() > capacity {
                return Err(Error::CapacityExceeded { capacity });
            }
        }
        Ok(Self { inner, capacity })
    }

    /// An empty stack with an already validated capacity.
    pub const fn empty(capacity: Option<usize>) -> Self {
        Self {
            inner: Vec::new(),
            capacity,
        }
    }

    /// An empty stack with no capacity.
    pub const fn unbounded() -> Self {
        Self::empty(None)
    }

    /// An empty stack holding at most `capacity` elements.
    pub fn bounded<C>(capacity: C) -> Result<Self>
    where
        C: TryInto<usize> + Copy + fmt::Display,
    {
        checked_capacity(capacity).map(|capacity| Self::empty(Some(capacity)))
    }

    /// Push `value` as the new top. A full stack is left untouched.
    pub fn push(&mut self, value: T) -> Result<()> {
        if let Some(capacity) = self.capacity {
            if self.inner.len() >= capacity {
                return Err(Error::CapacityExceeded { capacity });
            }
        }
        self.inner.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.inner.pop().ok_or(Error::Empty)
    }

    pub fn peek(&self) -> Result<&T> {
        self.inner.last().ok_or(Error::Empty)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Remove every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// True when the next push would fail. Never true for an unbounded stack.
    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.inner.len() >= capacity)
    }

    /// Elements from base to top.
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Iterate from base to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }
}

fn checked_capacity<C>(capacity: C) -> Result<usize>
where
    C: TryInto<usize> + Copy + fmt::Display,
{
    let Ok(checked) = capacity.try_into() else {
        return Err(Error::Config {
            capacity: capacity.to_string(),
        });
    };
    Ok(checked)
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> From<Vec<T>> for BoundedStack<T> {
    fn from(value: Vec<T>) -> Self {
        Self {
            inner: value,
            capacity: None,
        }
    }
}

impl<'a, T> IntoIterator for &'a BoundedStack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for BoundedStack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedStack({:?}, capacity={:?})", self.inner, self.capacity)
    }
}
