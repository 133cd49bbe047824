//! Frame pacing and the periodic timers that feed the event queue.

use crate::constants::{BIRD_ANIMATION_INTERVAL_MS, PIPE_SPAWN_INTERVAL_MS};
use crate::events::GameEvent;
use std::thread;
use std::time::{Duration, Instant};

/// Supplies one tick per frame, reporting how much time the frame took.
pub trait ClockSource {
    fn tick(&mut self) -> Duration;
}

/// Wall-clock pacing: sleeps out the rest of each frame to hold the target rate.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u64) -> Self {
        Self {
            frame: Duration::from_micros(1_000_000 / fps.max(1)),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl ClockSource for FrameClock {
    fn tick(&mut self) -> Duration {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let delta = now - self.last;
        self.last = now;
        delta
    }
}

/// A clock that reports the same step every frame without sleeping.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub step: Duration,
}

impl ClockSource for FixedClock {
    fn tick(&mut self) -> Duration {
        self.step
    }
}

/// Fires `event` every `interval` of accumulated frame time.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    elapsed: Duration,
    event: GameEvent,
}

impl IntervalTimer {
    pub fn new(interval: Duration, event: GameEvent) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            event,
        }
    }

    /// Accumulate `delta` and return how many times the timer fired.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.elapsed += delta;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    pub fn event(&self) -> GameEvent {
        self.event
    }
}

/// The spawn and animation timers the game registers.
#[derive(Debug, Clone)]
pub struct Timers {
    timers: [IntervalTimer; 2],
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl Timers {
    pub fn new() -> Self {
        Self {
            timers: [
                IntervalTimer::new(
                    Duration::from_millis(PIPE_SPAWN_INTERVAL_MS),
                    GameEvent::SpawnObstacle,
                ),
                IntervalTimer::new(
                    Duration::from_millis(BIRD_ANIMATION_INTERVAL_MS),
                    GameEvent::AnimateBird,
                ),
            ],
        }
    }

    /// Advance every timer and collect the events that fired this frame.
    pub fn advance(&mut self, delta: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for timer in &mut self.timers {
            for _ in 0..timer.advance(delta) {
                events.push(timer.event());
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_timer_fires_on_boundary() {
        let mut timer = IntervalTimer::new(Duration::from_millis(200), GameEvent::AnimateBird);
        assert_eq!(timer.advance(Duration::from_millis(150)), 0);
        assert_eq!(timer.advance(Duration::from_millis(50)), 1);
        assert_eq!(timer.advance(Duration::from_millis(199)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_interval_timer_catches_up_on_long_frames() {
        let mut timer = IntervalTimer::new(Duration::from_millis(200), GameEvent::AnimateBird);
        assert_eq!(timer.advance(Duration::from_millis(650)), 3);
        assert_eq!(timer.advance(Duration::from_millis(150)), 1);
    }

    #[test]
    fn test_zero_interval_never_fires() {
        let mut timer = IntervalTimer::new(Duration::ZERO, GameEvent::AnimateBird);
        assert_eq!(timer.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_timers_over_spawn_interval() {
        let mut timers = Timers::new();
        let events = timers.advance(Duration::from_millis(PIPE_SPAWN_INTERVAL_MS));
        let spawns = events
            .iter()
            .filter(|e| **e == GameEvent::SpawnObstacle)
            .count();
        let anims = events
            .iter()
            .filter(|e| **e == GameEvent::AnimateBird)
            .count();
        assert_eq!(spawns, 1);
        assert_eq!(anims, (PIPE_SPAWN_INTERVAL_MS / BIRD_ANIMATION_INTERVAL_MS) as usize);
    }

    #[test]
    fn test_frame_clock_duration() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.frame_duration(), Duration::from_micros(16_666));
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock {
            step: Duration::from_millis(16),
        };
        assert_eq!(clock.tick(), Duration::from_millis(16));
        assert_eq!(clock.tick(), Duration::from_millis(16));
    }
}
