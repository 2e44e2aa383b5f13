//! Index controller for the portfolio image slider.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one item")]
    Empty,
}

/// Whether an input that the carousel handled may continue to enclosing
/// click targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Stop,
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInput {
    Next,
    Previous,
    Select(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub position: usize,
    pub active: bool,
}

/// Wrapping cursor over a fixed, non-empty sequence.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self { items, index: 0 })
    }

    /// Infallible constructor for sequences known to be non-empty.
    pub fn with_first(first: T, rest: impl IntoIterator<Item = T>) -> Self {
        let mut items = vec![first];
        items.extend(rest);
        Self { items, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn next(&mut self) -> usize {
        self.index = next_index(self.index, self.items.len());
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = previous_index(self.index, self.items.len());
        self.index
    }

    /// Jumps to `position`; out-of-range positions leave the index untouched.
    pub fn select(&mut self, position: usize) -> usize {
        if position < self.items.len() {
            self.index = position;
        }
        self.index
    }

    pub fn handle(&mut self, input: CarouselInput) -> Propagation {
        match input {
            CarouselInput::Next => {
                self.next();
            }
            CarouselInput::Previous => {
                self.previous();
            }
            CarouselInput::Select(position) => {
                self.select(position);
            }
        }
        Propagation::Stop
    }

    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        (0..self.items.len()).map(move |position| Indicator {
            position,
            active: position == self.index,
        })
    }
}

/// `(i + 1) mod n`. `len` must be at least 1.
pub fn next_index(index: usize, len: usize) -> usize {
    debug_assert!(len >= 1);
    (index % len + 1) % len
}

/// `(i - 1 + n) mod n`. `len` must be at least 1.
pub fn previous_index(index: usize, len: usize) -> usize {
    debug_assert!(len >= 1);
    (index % len + len - 1) % len
}
