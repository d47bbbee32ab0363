/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub ball_exited_left: bool,
    pub ball_exited_right: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.ball_exited_left = false;
        self.ball_exited_right = false;
    }

    /// Ball left the field this frame and was served again
    pub fn ball_reset(&self) -> bool {
        self.ball_exited_left || self.ball_exited_right
    }
}

/// Host input, applied at the start of the next step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer moved to `y`, relative to the surface's top edge
    PointerMoved { y: f32 },
}

impl Command {
    /// Map an absolute pointer y onto the surface
    pub fn pointer_moved(client_y: f32, surface_top: f32) -> Self {
        Command::PointerMoved {
            y: client_y - surface_top,
        }
    }
}

/// Commands queued between frames
///
/// A new pointer position replaces any pending one, so the queue never holds
/// more than one `PointerMoved` however long frames are paused.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pub commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        match command {
            Command::PointerMoved { .. } => self
                .commands
                .retain(|queued| !matches!(queued, Command::PointerMoved { .. })),
        }
        self.commands.push(command);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Command> {
        self.commands.drain(..)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
