//! Cyclic browsing over the character registry.

use crate::story::Character;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Steps `index` one place in `direction`, wrapping within `[0, count)`.
///
/// `index` need not be normalized first. A `count` of zero yields zero.
pub fn advance(index: usize, count: usize, direction: Direction) -> usize {
    if count == 0 {
        return 0;
    }
    let index = index % count;
    match direction {
        Direction::Forward => (index + 1) % count,
        Direction::Backward => (index + count - 1) % count,
    }
}

/// The three slots the carousel shows; `current` is what "select" picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselWindow<'a> {
    pub previous: &'a Character,
    pub current: &'a Character,
    pub next: &'a Character,
}

pub fn window_view(characters: &[Character], index: usize) -> Option<CarouselWindow<'_>> {
    let count = characters.len();
    if count == 0 {
        return None;
    }
    let current = index % count;
    Some(CarouselWindow {
        previous: &characters[advance(current, count, Direction::Backward)],
        current: &characters[current],
        next: &characters[advance(current, count, Direction::Forward)],
    })
}
