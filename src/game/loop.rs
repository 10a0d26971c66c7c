use log::warn;

use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use crate::input_handler::{InputError, MoveInput};

use super::input_source::InputSource;
use super::renderer::GameRenderer;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
    message: Option<String>,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, engine: Engine) -> Self {
        Self {
            engine,
            ui: GameDisplay::new(),
            input_source,
            renderer,
            message: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn run(&mut self) {
        loop {
            if let Some(ending) = self.engine.ending() {
                self.message = Some(format!("Game over: {}!", ending));
            }
            self.renderer
                .render(&mut self.ui, &self.engine, self.message.as_deref());
            self.message = None;

            let input = if self.engine.is_over() {
                self.input_source.get_menu_input()
            } else {
                self.input_source.get_move(self.engine.board().turn())
            };
            let input = match input {
                Ok(Some(input)) => input,
                Ok(None) => {
                    self.message = Some("Invalid input".to_string());
                    continue;
                }
                Err(InputError::UserExit) => break,
                Err(error) => {
                    warn!("failed to read input: {}", error);
                    self.message = Some(format!("error: {}", error));
                    continue;
                }
            };

            match input {
                MoveInput::Quit => break,
                MoveInput::Restart => self.engine.restart(),
                MoveInput::Undo => {
                    if let Err(error) = self.engine.undo() {
                        self.message = Some(format!("error: {}", error));
                    }
                }
                MoveInput::Coordinate(coord) => {
                    if let Err(error) = self.engine.make_move(coord) {
                        self.message = Some(format!("error: {}", error));
                    }
                }
                MoveInput::UseEngine => {
                    match self.engine.make_best_move() {
                        Ok((coord, _)) => {
                            self.message = Some(format!("Computer played {}", coord));
                            if let Some(delay) = self.renderer.frame_delay() {
                                std::thread::sleep(delay);
                            }
                        }
                        Err(error) => {
                            self.message = Some(format!("error: {}", error));
                            break;
                        }
                    }
                }
            }
        }

        if let Some(message) = &self.message {
            println!("{}", message);
        }
    }
}
