use std::{
    hash::{Hash, Hasher},
    ops::Deref,
};

/// Fixed capacity vector stored inline. Used for checker stacks (at most 15
/// checkers fit on a point), rolls and the remaining dice of a turn.
#[derive(Debug, Clone, Copy)]
pub struct TinyVec<T, const N: usize>
where
    T: Copy + Default,
{
    buf: [T; N],
    len: u8,
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy + Default,
{
    pub fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec { buf: [T::default(); N], len: 0 }
    }

    pub fn from_slice(values: &[T]) -> Option<Self> {
        let mut vec = Self::new();
        for &v in values {
            vec.try_push(v).ok()?;
        }
        Some(vec)
    }

    /// Pushes `val`, handing it back when the vector is full.
    pub fn try_push(&mut self, val: T) -> Result<(), T> {
        if self.is_full() {
            return Err(val);
        }
        self.buf[self.len as usize] = val;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.buf[self.len as usize])
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len as usize == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy + Default + PartialEq,
{
    /// Removes the first occurrence of `val`, keeping the order of the rest.
    pub fn remove_one(&mut self, val: T) -> bool {
        let Some(index) = self.iter().position(|&v| v == val) else {
            return false;
        };
        let len = self.len as usize;
        self.buf.copy_within(index + 1..len, index);
        self.len -= 1;
        true
    }
}

impl<T: Copy + Default, const N: usize> Default for TinyVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// Slots past `len` may hold stale values, so comparisons only look at the live part.
impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for TinyVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for TinyVec<T, N> {}

impl<T: Copy + Default + Hash, const N: usize> Hash for TinyVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Copy + Default, const N: usize> Deref for TinyVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.buf[..self.len as usize]
    }
}
