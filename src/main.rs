use macroquad::prelude::{
    Conf, get_frame_time, is_quit_requested, next_frame, prevent_quit, request_new_screen_size,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use snake_adventure::config::{CONFIG_PATH, GameConfig};
use snake_adventure::highscore::HighScoreTable;
use snake_adventure::screen::{App, Flow};
use snake_adventure::input::KeyQueue;
use snake_adventure::render;

fn window_conf() -> Conf {
    let defaults = GameConfig::default();
    Conf {
        window_title: "Snake Adventure".to_owned(),
        window_width: defaults.window_width(),
        window_height: defaults.window_height(),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Snake Adventure starting");

    let config = GameConfig::load(CONFIG_PATH);
    if config != GameConfig::default() {
        request_new_screen_size(config.window_width() as f32, config.window_height() as f32);
    }
    let high_scores = HighScoreTable::load(&config.high_score_path);
    log::info!("best score so far: {}", high_scores.best());

    let mut app = App::new(config, high_scores, StdRng::from_entropy());
    let mut keys = KeyQueue::new();
    prevent_quit();

    'frames: loop {
        if is_quit_requested() {
            log::info!("window closed");
            break;
        }
        for key in keys.drain() {
            if app.handle_input(key) == Flow::Exit {
                break 'frames;
            }
        }

        app.advance(get_frame_time());
        render::draw(app.screen(), app.high_scores(), app.config());

        next_frame().await;
    }
}
