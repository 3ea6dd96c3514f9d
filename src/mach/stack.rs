use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Used for both the value stack and the call-return stack.
/// Popping an empty stack is an error, never a default value.

pub struct Stack<T> {
    name: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            name: self.name,
            vec: self.vec.clone(),
        }
    }
}

impl<T> Stack<T> {
    pub fn new(name: &'static str) -> Stack<T> {
        Stack { name, vec: vec![] }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.max_len() {
            Err(error!(OutOfMemory; &format!("{} OVERFLOW", self.name)))
        } else {
            Ok(())
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow; &format!("{} IS EMPTY", self.name))
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn top(&self) -> Result<&T> {
        match self.vec.last() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        if let Err(e) = self.overflow_check() {
            self.vec.pop();
            return Err(e);
        }
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_lifo() {
        let mut s: Stack<u8> = Stack::new("TEST STACK");
        s.push(3).unwrap();
        s.push(4).unwrap();
        assert_eq!(s.top(), Ok(&4));
        assert_eq!(s.pop(), Ok(4));
        assert_eq!(s.pop(), Ok(3));
        let e = s.pop().unwrap_err();
        assert_eq!(e.code(), ErrorCode::StackUnderflow);
        assert_eq!(e.to_string(), "STACK UNDERFLOW; TEST STACK IS EMPTY");
    }

    #[test]
    fn test_inspect_and_clear() {
        let mut s: Stack<u8> = Stack::new("TEST STACK");
        assert_eq!(s.last(), None);
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.last(), Some(&2));
        assert_eq!(s.iter().copied().collect::<Vec<u8>>(), vec![1, 2]);
        s.clear();
        assert!(s.is_empty());
        assert!(s.top().is_err());
    }

    #[test]
    fn test_overflow() {
        let mut s: Stack<()> = Stack::new("TEST STACK");
        for _ in 0..u16::max_value() {
            s.push(()).unwrap();
        }
        let e = s.push(()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        assert_eq!(s.len(), u16::max_value() as usize);
    }
}
