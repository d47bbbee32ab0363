//! Frame driver: update then render, repeated until told to stop

use crate::render::{render, DrawSurface};
use crate::{Command, Events, Game};

/// Owns the game state and advances it one frame at a time
pub struct FrameLoop {
    game: Game,
    frames: u64,
}

impl FrameLoop {
    pub fn new(game: Game) -> Self {
        Self { game, frames: 0 }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Queue host input for the next frame
    pub fn push_command(&mut self, command: Command) {
        self.game.commands.push(command);
    }

    /// Run one frame and return what happened in it
    pub fn frame<S: DrawSurface>(&mut self, surface: &mut S) -> &Events {
        self.game.update();
        render(&self.game, surface);
        self.frames += 1;
        &self.game.events
    }

    /// Run frames until `should_stop` returns true (checked before each frame)
    pub fn run<S, F>(&mut self, surface: &mut S, mut should_stop: F)
    where
        S: DrawSurface,
        F: FnMut(&FrameLoop) -> bool,
    {
        while !should_stop(self) {
            self.frame(surface);
        }
    }
}
