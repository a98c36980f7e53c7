/// Last-in first-out record of what each placement overwrote, so placements
/// can be reverted in the reverse order they were made.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateStack<T> {
    stack: Vec<T>,
}

impl<T> StateStack<T> {
    pub fn new() -> Self {
        // a full game never has more than 10 placements on the stack at once
        Self {
            stack: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, value: T) {
        self.stack.push(value);
    }

    pub fn peek(&self) -> Option<&T> {
        self.stack.last()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
