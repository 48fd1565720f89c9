use macroquad::prelude::*;

use crate::config::GameConfig;
use crate::entity::{FoodKind, PowerUpKind};
use crate::grid::Cell;
use crate::highscore::HighScoreTable;
use crate::screen::Screen;
use crate::session::GameSession;

// Palette
const SNAKE_HEAD: Color = Color::new(0.0, 0.5, 0.0, 1.0);
const SNAKE_BODY: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const SNAKE_FLASH: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const FOOD_NORMAL: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const FOOD_GOLDEN: Color = Color::new(1.0, 1.0, 0.0, 1.0);
const FOOD_GOLDEN_CORE: Color = Color::new(1.0, 0.65, 0.0, 1.0);
const FOOD_POISON: Color = Color::new(0.5, 0.0, 0.5, 1.0);
const POWER_SPEED: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const POWER_INVINCIBLE: Color = Color::new(1.0, 0.65, 0.0, 1.0);
const POWER_DOUBLE: Color = Color::new(0.5, 0.0, 0.5, 1.0);
const DIM: Color = Color::new(0.5, 0.5, 0.5, 1.0);

const TITLE_SIZE: f32 = 36.0;
const TEXT_SIZE: f32 = 24.0;

fn cell_rect(cell: Cell, tile: f32) -> Rect {
    Rect::new(cell.x as f32 * tile, cell.y as f32 * tile, tile, tile)
}

fn food_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Normal => FOOD_NORMAL,
        FoodKind::Golden => FOOD_GOLDEN,
        FoodKind::Poison => FOOD_POISON,
    }
}

fn power_up_color(kind: PowerUpKind) -> Color {
    match kind {
        PowerUpKind::Speed => POWER_SPEED,
        PowerUpKind::Invincible => POWER_INVINCIBLE,
        PowerUpKind::DoubleScore => POWER_DOUBLE,
    }
}

fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let m = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, size, color);
}

pub fn draw(screen: &Screen, high_scores: &HighScoreTable, config: &GameConfig) {
    clear_background(BLACK);
    match screen {
        Screen::Menu => draw_menu(),
        Screen::Playing(session) => draw_game(session, config),
        Screen::Paused(session) => draw_paused(session, config),
        Screen::GameOver(session) => draw_game_over(session),
        Screen::HighScores => draw_high_scores(high_scores),
    }
}

fn draw_menu() {
    draw_centered("SNAKE ADVENTURE", 150.0, TITLE_SIZE, SNAKE_BODY);
    let lines = [
        "Press ENTER to Start",
        "Press H for High Scores",
        "Press Q to Quit",
        "",
        "Use Arrow Keys to Move",
        "Avoid Poison Food (Purple)",
        "Collect Golden Food for Bonus",
        "Collect Power-ups for Special Effects",
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_centered(line, 250.0 + i as f32 * 25.0, TEXT_SIZE, WHITE);
    }
}

fn draw_game(session: &GameSession, config: &GameConfig) {
    let tile = config.tile_size as f32;

    let snake = session.snake();
    let flashing = snake.is_invulnerable() && snake.invulnerable_ticks() % 10 < 5;
    for (i, cell) in snake.body().iter().enumerate() {
        let color = match (flashing, i) {
            (true, _) => SNAKE_FLASH,
            (false, 0) => SNAKE_HEAD,
            (false, _) => SNAKE_BODY,
        };
        let r = cell_rect(*cell, tile);
        draw_rectangle(r.x, r.y, r.w, r.h, color);
        if i == 0 {
            let eye = tile * 0.15;
            draw_circle(r.x + tile * 0.3, r.y + tile * 0.3, eye, WHITE);
            draw_circle(r.x + tile * 0.7, r.y + tile * 0.3, eye, WHITE);
        }
    }

    for food in session.foods() {
        let r = cell_rect(food.cell, tile);
        draw_rectangle(r.x, r.y, r.w, r.h, food_color(food.kind));
        if food.kind == FoodKind::Golden {
            let inset = tile * 0.25;
            draw_rectangle(r.x + inset, r.y + inset, r.w - 2.0 * inset, r.h - 2.0 * inset, FOOD_GOLDEN_CORE);
        }
    }

    for power_up in session.power_ups() {
        let r = cell_rect(power_up.cell, tile);
        let c = r.center();
        draw_circle(c.x, c.y, tile * 0.5, power_up_color(power_up.kind));
    }

    // HUD
    draw_text(&format!("Score: {}", session.score()), 10.0, 24.0, TEXT_SIZE, WHITE);
    draw_text(&format!("Level: {}", session.level()), 10.0, 49.0, TEXT_SIZE, WHITE);
    draw_text(&format!("Length: {}", snake.len()), 10.0, 74.0, TEXT_SIZE, WHITE);
    if let Some(active) = session.active_power_up() {
        draw_text(&format!("Power-up: {}", active.kind.label()), 10.0, 99.0, TEXT_SIZE, FOOD_GOLDEN);
    }
}

fn draw_paused(session: &GameSession, config: &GameConfig) {
    draw_game(session, config);
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.5));
    let mid = screen_height() * 0.5;
    draw_centered("PAUSED", mid, TITLE_SIZE, WHITE);
    draw_centered("Press ESC to Resume or Q for Menu", mid + 40.0, TEXT_SIZE, WHITE);
}

fn draw_game_over(session: &GameSession) {
    let mid = screen_height() * 0.5;
    draw_centered("GAME OVER", mid - 50.0, TITLE_SIZE, FOOD_NORMAL);
    draw_centered(&format!("Final Score: {}", session.score()), mid, TITLE_SIZE, WHITE);
    draw_centered("Press ENTER to Play Again or Q for Menu", mid + 50.0, TEXT_SIZE, WHITE);
}

fn draw_high_scores(high_scores: &HighScoreTable) {
    draw_centered("HIGH SCORES", 100.0, TITLE_SIZE, FOOD_GOLDEN);
    for (i, score) in high_scores.scores().iter().enumerate() {
        draw_centered(&format!("{:2}. {:6}", i + 1, score), 150.0 + i as f32 * 30.0, TEXT_SIZE, WHITE);
    }
    draw_centered("Press ESC to go back", 500.0, TEXT_SIZE, DIM);
}
