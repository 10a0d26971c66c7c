use std::time::Duration;

use crate::game::display::GameDisplay;
use crate::game::engine::Engine;

const PROMPT: &str = "Enter your move as `row col`, or `undo`, `restart`, `quit`:";

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, message: Option<&str>);
    fn frame_delay(&self) -> Option<Duration>;
}

fn format_stats(engine: &Engine) -> String {
    let stats = engine.search_stats();
    format!(
        "* Evaluation: {}\n* Score: {}\n* Positions searched: {} (depth: {}, cutoffs: {})\n* Move took: {}",
        engine.evaluate(),
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth,
        stats.cutoffs,
        stats
            .last_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

fn with_prompt(message: Option<&str>) -> String {
    match message {
        Some(message) => format!("{}\n{}", message, PROMPT),
        None => PROMPT.to_string(),
    }
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, message: Option<&str>) {
        let board = engine.board();
        ui.render_game_state(board, board.turn(), None, Some(&with_prompt(message)));
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct StatsRenderer {
    /// Searches on small boards finish almost instantly, so a pause between
    /// moves keeps the game watchable.
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, message: Option<&str>) {
        let board = engine.board();
        ui.render_game_state(board, board.turn(), Some(&format_stats(engine)), message);
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_color: crate::board::color::Color,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, message: Option<&str>) {
        let board = engine.board();
        let stats = format_stats(engine);
        if board.turn() == self.human_color || engine.is_over() {
            ui.render_game_state(board, board.turn(), Some(&stats), Some(&with_prompt(message)));
        } else {
            ui.render_game_state(board, board.turn(), Some(&stats), message);
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
