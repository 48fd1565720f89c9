use rand::Rng;

use crate::config::{
    FOODS_PER_LEVEL, POISON_INVULNERABILITY, POISON_SHRINK, POISON_SHRINK_MIN_LEN, POWER_UP_DURATION,
};
use crate::entity::{ActivePowerUp, Food, FoodKind, PowerUp, PowerUpKind};
use crate::grid::{Cell, Direction};
use crate::snake::Snake;
use crate::spawner;
use crate::speed::TickSpeed;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Alive,
    Crashed,
}

/// Everything that belongs to one run, from reset to game over.
#[derive(Clone, Debug)]
pub struct GameSession {
    width: i32,
    height: i32,
    snake: Snake,
    foods: Vec<Food>,
    power_ups: Vec<PowerUp>,
    active: Option<ActivePowerUp>,
    score: i64,
    level: u32,
    foods_eaten: u32,
    speed: TickSpeed,
    multiplier: u32,
}

impl GameSession {
    pub fn new<R: Rng>(width: i32, height: i32, rng: &mut R) -> Self {
        let mut session = Self {
            width,
            height,
            snake: Snake::new(Cell::new(width / 2, height / 2)),
            foods: Vec::new(),
            power_ups: Vec::new(),
            active: None,
            score: 0,
            level: 1,
            foods_eaten: 0,
            speed: TickSpeed::default(),
            multiplier: 1,
        };
        spawner::refill_food(rng, &mut session.foods, &session.snake, width, height);
        session
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn active_power_up(&self) -> Option<ActivePowerUp> {
        self.active
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn foods_eaten(&self) -> u32 {
        self.foods_eaten
    }

    pub fn speed(&self) -> TickSpeed {
        self.speed
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.change_direction(direction);
    }

    /// Advances the simulation by one tick.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        self.snake.advance();
        if self.snake.check_collision(self.width, self.height) {
            return TickOutcome::Crashed;
        }

        self.resolve_head();

        self.foods.retain_mut(|f| f.tick());
        spawner::refill_food(rng, &mut self.foods, &self.snake, self.width, self.height);

        self.power_ups.retain_mut(|p| p.tick());
        spawner::maybe_spawn_power_up(
            rng,
            &mut self.power_ups,
            &self.foods,
            &self.snake,
            self.width,
            self.height,
        );

        self.decay_power_up();
        TickOutcome::Alive
    }

    // At most one food and one power-up are consumed per tick, first match in list order.
    fn resolve_head(&mut self) {
        let head = self.snake.head();
        if let Some(idx) = self.foods.iter().position(|f| f.cell == head) {
            let food = self.foods.remove(idx);
            self.eat(food.kind);
        }
        if let Some(idx) = self.power_ups.iter().position(|p| p.cell == head) {
            let power_up = self.power_ups.remove(idx);
            self.activate_power_up(power_up.kind);
        }
    }

    pub fn eat(&mut self, kind: FoodKind) {
        let profile = kind.profile();
        self.score += profile.points * i64::from(self.multiplier);
        self.foods_eaten += 1;

        match kind {
            FoodKind::Normal => self.snake.grow(profile.growth),
            FoodKind::Golden => {
                self.snake.grow(profile.growth);
                self.speed.add_half();
            }
            FoodKind::Poison => {
                self.snake.shrink(POISON_SHRINK, POISON_SHRINK_MIN_LEN);
                self.snake.set_invulnerable(POISON_INVULNERABILITY);
            }
        }

        if self.foods_eaten % FOODS_PER_LEVEL == 0 {
            self.level += 1;
            self.speed.add_whole();
            log::info!("level {} reached, base speed {}", self.level, self.speed.base());
        }
    }

    /// Starts `kind`'s effect. Whatever was active is overwritten, not reversed.
    pub fn activate_power_up(&mut self, kind: PowerUpKind) {
        if let Some(previous) = self.active {
            log::debug!("power-up {:?} replaced by {kind:?}", previous.kind);
        }
        self.active = Some(ActivePowerUp::new(kind));

        match kind {
            PowerUpKind::Speed => self.speed.boost(),
            PowerUpKind::Invincible => self.snake.set_invulnerable(POWER_UP_DURATION),
            PowerUpKind::DoubleScore => self.multiplier = 2,
        }
        log::debug!("power-up {kind:?} active for {POWER_UP_DURATION} ticks");
    }

    fn decay_power_up(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.remaining = active.remaining.saturating_sub(1);
        if active.remaining > 0 {
            return;
        }

        match active.kind {
            PowerUpKind::Speed => self.speed.unboost(),
            PowerUpKind::DoubleScore => self.multiplier = 1,
            // runs out on the snake's own countdown
            PowerUpKind::Invincible => {}
        }
        log::debug!("power-up {:?} expired", active.kind);
        self.active = None;
    }
}
