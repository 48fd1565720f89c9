use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{FOOD_TARGET_COUNT, MAX_POWER_UPS, POWER_UP_SPAWN_ODDS};
use crate::entity::{Food, FoodKind, PowerUp, PowerUpKind};
use crate::grid::Cell;
use crate::snake::Snake;

fn free_cells(width: i32, height: i32, taken: impl Fn(Cell) -> bool) -> Vec<Cell> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
        .filter(|c| !taken(*c))
        .collect()
}

pub fn random_food_kind<R: Rng>(rng: &mut R) -> FoodKind {
    FoodKind::ALL
        .choose_weighted(rng, |k| k.profile().spawn_weight)
        .copied()
        .unwrap_or(FoodKind::Normal)
}

/// Tops the food list back up to its quota on cells free of snake and food.
/// Stops early when the board has no free cell left.
pub fn refill_food<R: Rng>(
    rng: &mut R,
    foods: &mut Vec<Food>,
    snake: &Snake,
    width: i32,
    height: i32,
) -> usize {
    if foods.len() >= FOOD_TARGET_COUNT {
        return 0;
    }
    let mut free = free_cells(width, height, |c| {
        snake.occupies(c) || foods.iter().any(|f| f.cell == c)
    });

    let mut spawned = 0;
    while foods.len() < FOOD_TARGET_COUNT && !free.is_empty() {
        let cell = free.swap_remove(rng.gen_range(0..free.len()));
        let kind = random_food_kind(rng);
        log::debug!("food {kind:?} spawned at ({}, {})", cell.x, cell.y);
        foods.push(Food::new(cell, kind));
        spawned += 1;
    }
    spawned
}

/// Rolls the per-tick power-up chance and places one on a cell free of
/// snake, food and other power-ups.
pub fn maybe_spawn_power_up<R: Rng>(
    rng: &mut R,
    power_ups: &mut Vec<PowerUp>,
    foods: &[Food],
    snake: &Snake,
    width: i32,
    height: i32,
) -> Option<PowerUpKind> {
    if power_ups.len() >= MAX_POWER_UPS || rng.gen_range(0..POWER_UP_SPAWN_ODDS) != 0 {
        return None;
    }
    let free = free_cells(width, height, |c| {
        snake.occupies(c)
            || foods.iter().any(|f| f.cell == c)
            || power_ups.iter().any(|p| p.cell == c)
    });
    let cell = *free.choose(rng)?;
    let kind = *PowerUpKind::ALL.choose(rng)?;
    log::debug!("power-up {kind:?} spawned at ({}, {})", cell.x, cell.y);
    power_ups.push(PowerUp::new(cell, kind));
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn refill_reaches_quota_on_free_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new(Cell::new(2, 2));
        let mut foods = vec![Food::new(Cell::new(0, 0), FoodKind::Normal)];

        assert_eq!(refill_food(&mut rng, &mut foods, &snake, 5, 5), 2);
        assert_eq!(foods.len(), FOOD_TARGET_COUNT);

        let cells: HashSet<Cell> = foods.iter().map(|f| f.cell).collect();
        assert_eq!(cells.len(), foods.len());
        assert!(!cells.contains(&snake.head()));
        assert!(cells.iter().all(|c| c.in_bounds(5, 5)));

        assert_eq!(refill_food(&mut rng, &mut foods, &snake, 5, 5), 0);
    }

    #[test]
    fn refill_stops_on_full_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let snake = Snake::new(Cell::new(0, 0));
        let mut foods = Vec::new();
        assert_eq!(refill_food(&mut rng, &mut foods, &snake, 2, 1), 1);
        assert_eq!(foods[0].cell, Cell::new(1, 0));
    }

    #[test]
    fn food_kinds_follow_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 3];
        for _ in 0..10_000 {
            match random_food_kind(&mut rng) {
                FoodKind::Normal => counts[0] += 1,
                FoodKind::Golden => counts[1] += 1,
                FoodKind::Poison => counts[2] += 1,
            }
        }
        assert!((6_500..7_500).contains(&counts[0]), "{counts:?}");
        assert!((1_500..2_500).contains(&counts[1]), "{counts:?}");
        assert!((600..1_400).contains(&counts[2]), "{counts:?}");
    }

    #[test]
    fn power_ups_capped_and_placed_on_free_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::new(Cell::new(1, 1));
        let foods = vec![Food::new(Cell::new(0, 0), FoodKind::Normal)];
        let mut power_ups = Vec::new();

        for _ in 0..100_000 {
            maybe_spawn_power_up(&mut rng, &mut power_ups, &foods, &snake, 3, 3);
        }
        assert_eq!(power_ups.len(), MAX_POWER_UPS);
        assert_ne!(power_ups[0].cell, power_ups[1].cell);
        for p in &power_ups {
            assert!(p.cell != Cell::new(1, 1) && p.cell != Cell::new(0, 0));
        }
    }

    #[test]
    fn power_up_spawn_is_rare() {
        let mut rng = StdRng::seed_from_u64(9);
        let snake = Snake::new(Cell::new(1, 1));
        let mut spawned = 0;
        for _ in 0..20_000 {
            let mut power_ups = Vec::new();
            if maybe_spawn_power_up(&mut rng, &mut power_ups, &[], &snake, 10, 10).is_some() {
                spawned += 1;
            }
        }
        assert!((50..150).contains(&spawned), "{spawned}");
    }
}
