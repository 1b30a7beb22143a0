/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// Directional key presses sampled over one frame.
///
/// Presses are edge-triggered: the input layer records fresh key-down events
/// only, and the frame is drained once it has been applied to the engine.
/// When several directions are pressed in the same frame, they are considered
/// in the fixed order Up, Right, Down, Left and the first valid one wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directional press
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Right => self.right = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
        }
    }

    /// Pressed directions in priority order
    pub fn pressed(&self) -> impl Iterator<Item = Direction> + '_ {
        [
            (self.up, Direction::Up),
            (self.right, Direction::Right),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
        ]
        .into_iter()
        .filter_map(|(pressed, direction)| pressed.then_some(direction))
    }

    /// Reset the frame, returning the sampled presses
    pub fn take(&mut self) -> InputFrame {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Right.is_opposite(Direction::Down));
    }

    #[test]
    fn test_press_priority_order() {
        let mut frame = InputFrame::new();
        frame.press(Direction::Left);
        frame.press(Direction::Up);
        frame.press(Direction::Down);

        let order: Vec<_> = frame.pressed().collect();
        assert_eq!(order, vec![Direction::Up, Direction::Down, Direction::Left]);
    }

    #[test]
    fn test_take_drains_frame() {
        let mut frame = InputFrame::new();
        frame.press(Direction::Right);

        let sampled = frame.take();
        assert!(sampled.right);
        assert_eq!(frame, InputFrame::new());
    }
}
