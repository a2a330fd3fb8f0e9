use core::fmt;

/// Operand stack used by the VM.
///
/// Unlike a bare `Vec`, every operation that needs values reports underflow
/// through its return type, so a malformed expression can never read past
/// the bottom of the stack.
///
/// # Examples
///
/// ```ignore
/// let mut stack = Stack::with_capacity(4);
/// stack.push(1.0);
/// stack.push(2.0);
/// assert_eq!(stack.pop_n::<2>(), Some([1.0, 2.0]));
/// assert!(stack.is_empty());
/// ```
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T: Copy> Stack<T> {
    /// Creates an empty stack.
    ///
    /// `capacity` is a hint (`Engine::run` passes the checker's `max_depth`);
    /// the stack grows past it if needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top value, `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes the top `N` values and returns them bottom to top.
    ///
    /// `[..., a, b]` pops as `[a, b]`, so the first element is the operand
    /// that was pushed first. Leaves the stack untouched when fewer than `N`
    /// values are present.
    #[inline]
    pub fn pop_n<const N: usize>(&mut self) -> Option<[T; N]> {
        let start = self.items.len().checked_sub(N)?;
        let values: [T; N] = self.items[start..].try_into().ok()?;
        self.items.truncate(start);
        Some(values)
    }

    /// Returns the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Duplicates the top value. Returns `false` on an empty stack.
    #[inline]
    pub fn dup(&mut self) -> bool {
        match self.items.last() {
            Some(&top) => {
                self.items.push(top);
                true
            }
            None => false,
        }
    }

    /// Swaps the two topmost values. Returns `false` with fewer than two.
    #[inline]
    pub fn swap(&mut self) -> bool {
        let len = self.items.len();
        if len < 2 {
            return false;
        }
        self.items.swap(len - 1, len - 2);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all values, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Makes room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Iterates from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack() {
        let stack: Stack<f64> = Stack::with_capacity(8);
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::with_capacity(2);
        stack.push(1.0);
        stack.push(2.0);
        assert_eq!(stack.pop(), Some(2.0));
        assert_eq!(stack.pop(), Some(1.0));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_pop_n_order() {
        let mut stack = Stack::with_capacity(3);
        stack.push(1.0);
        stack.push(2.0);
        stack.push(3.0);
        assert_eq!(stack.pop_n::<2>(), Some([2.0, 3.0]));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop_n::<1>(), Some([1.0]));
    }

    #[test]
    fn test_pop_n_underflow_leaves_stack() {
        let mut stack = Stack::with_capacity(1);
        stack.push(7.0);
        assert_eq!(stack.pop_n::<2>(), None);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(&7.0));
    }

    #[test]
    fn test_dup() {
        let mut stack = Stack::with_capacity(2);
        assert!(!stack.dup());
        stack.push(4.0);
        assert!(stack.dup());
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![4.0, 4.0]);
    }

    #[test]
    fn test_swap() {
        let mut stack = Stack::with_capacity(2);
        stack.push(1.0);
        assert!(!stack.swap());
        stack.push(2.0);
        assert!(stack.swap());
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2.0, 1.0]);
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::with_capacity(2);
        stack.push(1.0);
        stack.push(2.0);
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_debug() {
        let mut stack = Stack::with_capacity(2);
        stack.push(1.5);
        stack.push(2.0);
        assert_eq!(format!("{:?}", stack), "[1.5, 2.0]");
    }
}
