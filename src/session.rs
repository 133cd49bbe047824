//! The game session: menu/active state machine and the per-frame cycle.

use crate::bird::Bird;
use crate::clock::{ClockSource, Timers};
use crate::constants::{
    FLOOR_THRESHOLD, HIGHSCORE_LABEL_Y, MENU_HEIGHT, MENU_WIDTH, MENU_X, MENU_Y, SCORE_LABEL_Y,
    SURFACE_WIDTH,
};
use crate::events::{GameEvent, InputSource};
use crate::geometry::Rect;
use crate::pipe::Pipe;
use crate::render::{Canvas, Sprite};
use crate::scene::Scene;
use crate::ui::TerminalCanvas;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    Active,
}

/// Whether the loop should keep going after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns everything that changes during play.
#[derive(Debug, Clone)]
pub struct Session {
    pub bird: Bird,
    /// Pipes in spawn order; the front is the leftmost.
    pub pipes: VecDeque<Pipe>,
    pub scene: Scene,
    pub state: SessionState,
    pub score: u32,
    /// Best score this process has seen. Never decreases.
    pub highscore: u32,
}

impl Session {
    pub fn new(scene: Scene) -> Self {
        Self {
            bird: Bird::new(),
            pipes: VecDeque::new(),
            scene,
            state: SessionState::Menu,
            score: 0,
            highscore: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Menu -> Active.
    pub fn start(&mut self) {
        if self.is_active() {
            return;
        }
        self.state = SessionState::Active;
        self.score = 0;
        log::info!("round started (highscore {})", self.highscore);
    }

    /// Active -> Menu. Banks the score and clears the field.
    pub fn stop(&mut self) {
        if !self.is_active() {
            return;
        }
        self.state = SessionState::Menu;
        if self.score > self.highscore {
            log::info!("new highscore {} (was {})", self.score, self.highscore);
            self.highscore = self.score;
        }
        log::info!("round over with score {}", self.score);
        self.pipes.clear();
        self.bird.reset();
    }

    pub fn handle_event<R: Rng + ?Sized>(&mut self, event: GameEvent, rng: &mut R) -> Flow {
        match event {
            GameEvent::Quit => return Flow::Quit,
            GameEvent::AnimateBird => self.bird.animate(),
            GameEvent::SpawnObstacle if self.is_active() => {
                let pipe = Pipe::new(rng);
                log::debug!("spawned pipe with gap at {}", pipe.gap_y);
                self.pipes.push_back(pipe);
            }
            GameEvent::Start if !self.is_active() => self.start(),
            GameEvent::Jump if self.is_active() => self.bird.jump(),
            _ => {}
        }
        Flow::Continue
    }

    /// Advance the simulation by one frame.
    pub fn update(&mut self) {
        self.scene.scroll_floor();
        if !self.is_active() {
            return;
        }

        self.bird.fall();
        for pipe in &mut self.pipes {
            pipe.move_left();
        }
        self.evict_offscreen_pipes();
        self.update_score();

        if self.collision() {
            self.stop();
        }
    }

    fn evict_offscreen_pipes(&mut self) {
        while self.pipes.front().is_some_and(Pipe::is_offscreen) {
            self.pipes.pop_front();
            log::debug!("evicted off-screen pipe, {} remaining", self.pipes.len());
        }
    }

    /// Count each pipe once, the first frame its center is behind the bird.
    fn update_score(&mut self) {
        let bird_x = self.bird.x();
        for pipe in &mut self.pipes {
            if !pipe.scored && pipe.center_x() < bird_x {
                pipe.scored = true;
                self.score += 1;
            }
        }
    }

    /// True if the bird hit the top edge, the floor, or any pipe.
    pub fn collision(&self) -> bool {
        let bird = self.bird.rect();
        if bird.top() <= 0.0 || bird.bottom() >= FLOOR_THRESHOLD {
            return true;
        }
        self.pipes.iter().any(|pipe| pipe.collides_with(&bird))
    }

    /// Handle one frame's events in arrival order, then update.
    pub fn step<I, R>(&mut self, events: I, rng: &mut R) -> Flow
    where
        I: IntoIterator<Item = GameEvent>,
        R: Rng + ?Sized,
    {
        let mut flow = Flow::Continue;
        for event in events {
            if self.handle_event(event, rng) == Flow::Quit {
                flow = Flow::Quit;
            }
        }
        self.update();
        flow
    }

    /// Draw the frame back to front.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.scene.draw_background(canvas);

        if self.is_active() {
            canvas.draw_sprite(
                Sprite::Bird {
                    frame: self.bird.frame(),
                    rotation: self.bird.rotation(),
                },
                self.bird.rect(),
            );
            for pipe in &self.pipes {
                canvas.draw_sprite(Sprite::LowerPipe, pipe.lower);
                canvas.draw_sprite(Sprite::UpperPipe, pipe.upper);
            }
        } else {
            canvas.draw_sprite(
                Sprite::Menu,
                Rect::new(MENU_X, MENU_Y, MENU_WIDTH, MENU_HEIGHT),
            );
            canvas.draw_label(
                &format!("Highscore: {}", self.highscore),
                SURFACE_WIDTH / 2.0,
                HIGHSCORE_LABEL_Y,
            );
        }

        canvas.draw_label(
            &format!("Score: {}", self.score),
            SURFACE_WIDTH / 2.0,
            SCORE_LABEL_Y,
        );
        self.scene.draw_floor(canvas);
    }

    /// Run the game loop until a quit event arrives.
    pub fn run<B, C, I, R>(
        &mut self,
        terminal: &mut Terminal<B>,
        clock: &mut C,
        input: &mut I,
        rng: &mut R,
    ) -> io::Result<()>
    where
        B: Backend,
        C: ClockSource,
        I: InputSource,
        R: Rng,
    {
        let mut timers = Timers::new();
        loop {
            let delta = clock.tick();
            let mut events = input.poll_events()?;
            events.extend(timers.advance(delta));

            let flow = self.step(events, rng);

            terminal.draw(|frame| {
                let area = frame.size();
                let mut canvas = TerminalCanvas::new(frame.buffer_mut(), area);
                self.render(&mut canvas);
            })?;

            if flow == Flow::Quit {
                log::info!("quit requested, highscore {}", self.highscore);
                return Ok(());
            }
        }
    }
}
