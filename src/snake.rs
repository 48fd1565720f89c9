use crate::grid::{Cell, Direction};

#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Cell>, // head first, never empty
    direction: Direction,
    grow_pending: u32,
    invulnerable: u32,
}

impl Snake {
    pub fn new(start: Cell) -> Self {
        Self {
            body: vec![start],
            direction: Direction::Right,
            grow_pending: 0,
            invulnerable: 0,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grow_pending(&self) -> u32 {
        self.grow_pending
    }

    pub fn invulnerable_ticks(&self) -> u32 {
        self.invulnerable
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Turns the snake unless `direction` would reverse it onto its own neck.
    pub fn change_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.direction = direction;
        }
    }

    /// One tick of motion. The invulnerability countdown is consumed here,
    /// before the caller evaluates collisions for the new head.
    pub fn advance(&mut self) {
        self.invulnerable = self.invulnerable.saturating_sub(1);

        let new_head = self.head().step(self.direction);
        self.body.insert(0, new_head);

        if self.grow_pending > 0 {
            self.grow_pending -= 1;
        } else {
            self.body.pop();
        }
    }

    pub fn grow(&mut self, segments: u32) {
        self.grow_pending += segments;
    }

    /// Drops `segments` cells off the tail, only while the snake is longer than `min_len`.
    pub fn shrink(&mut self, segments: usize, min_len: usize) {
        if self.body.len() > min_len {
            let keep = self.body.len().saturating_sub(segments).max(1);
            self.body.truncate(keep);
        }
    }

    pub fn set_invulnerable(&mut self, ticks: u32) {
        self.invulnerable = ticks;
    }

    /// Wall hits always count; self hits only while not invulnerable.
    pub fn check_collision(&self, width: i32, height: i32) -> bool {
        let head = self.head();
        if !head.in_bounds(width, height) {
            return true;
        }
        !self.is_invulnerable() && self.body[1..].contains(&head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 40;
    const H: i32 = 30;

    fn looped_snake() -> Snake {
        // Head sits on its own tail: a length 4 body closed into a square.
        Snake {
            body: vec![
                Cell::new(5, 5),
                Cell::new(5, 6),
                Cell::new(6, 6),
                Cell::new(5, 5),
            ],
            direction: Direction::Up,
            grow_pending: 0,
            invulnerable: 0,
        }
    }

    #[test]
    fn move_without_growth_keeps_length() {
        let mut snake = Snake::new(Cell::new(20, 15));
        for _ in 0..5 {
            snake.advance();
        }
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(25, 15));
    }

    #[test]
    fn pending_growth_adds_one_cell_per_move() {
        let mut snake = Snake::new(Cell::new(20, 15));
        snake.grow(2);
        snake.advance();
        assert_eq!((snake.len(), snake.grow_pending()), (2, 1));
        snake.advance();
        assert_eq!((snake.len(), snake.grow_pending()), (3, 0));
        snake.advance();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body(), &[Cell::new(23, 15), Cell::new(22, 15), Cell::new(21, 15)]);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new(Cell::new(20, 15));
        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);
        snake.change_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
        snake.change_direction(Direction::Down);
        assert_eq!(snake.direction(), Direction::Up);
        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn wall_collision_ignores_invulnerability() {
        for head in [Cell::new(-1, 3), Cell::new(W, 3), Cell::new(3, -1), Cell::new(3, H)] {
            let mut snake = Snake::new(head);
            assert!(snake.check_collision(W, H));
            snake.set_invulnerable(300);
            assert!(snake.check_collision(W, H));
        }
    }

    #[test]
    fn self_collision_suppressed_while_invulnerable() {
        let mut snake = looped_snake();
        assert!(snake.check_collision(W, H));

        snake.set_invulnerable(2);
        assert!(!snake.check_collision(W, H));
        snake.invulnerable -= 1;
        assert!(!snake.check_collision(W, H));
        snake.invulnerable -= 1;
        assert!(snake.check_collision(W, H));
    }

    #[test]
    fn advance_consumes_invulnerability() {
        let mut snake = Snake::new(Cell::new(20, 15));
        snake.set_invulnerable(1);
        snake.advance();
        assert!(!snake.is_invulnerable());
        snake.advance();
        assert_eq!(snake.invulnerable_ticks(), 0);
    }

    #[test]
    fn running_into_own_body() {
        let mut snake = Snake::new(Cell::new(10, 10));
        snake.grow(4);
        for _ in 0..4 {
            snake.advance();
        }
        for dir in [Direction::Down, Direction::Left, Direction::Up] {
            snake.change_direction(dir);
            snake.advance();
        }
        assert_eq!(snake.head(), Cell::new(13, 10));
        assert!(snake.check_collision(W, H));
    }

    #[test]
    fn shrink_respects_minimum_length() {
        let mut snake = looped_snake();
        snake.shrink(2, 3);
        assert_eq!(snake.len(), 2);
        snake.shrink(2, 3);
        assert_eq!(snake.len(), 2);

        let mut short = Snake::new(Cell::new(0, 0));
        short.shrink(2, 0);
        assert_eq!(short.len(), 1);
    }
}
