use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use log::{debug, info};

/// Source of timestamps in seconds. Only differences between readings matter
pub trait Clock {
    fn now(&self) -> f64;
}

/// Monotonic wall clock measured from construction
pub struct SystemClock {
    origin:Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {origin:Instant::now()}
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock. Clones share the same time so a test can keep a handle
/// while the controller owns another
#[derive(Clone, Default)]
pub struct ManualClock {
    t:Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(t:f64) -> Self {
        Self {t:Rc::new(Cell::new(t))}
    }
    pub fn advance(&self,dt:f64) {
        self.t.set(self.t.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.t.get()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackMode {
    Stopped,
    Running,
    Paused,
}

/// What a tick did, so the caller knows whether to redraw
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// not running, nothing changed
    Idle,
    Advanced(usize),
    /// reached the last frame and reset to frame 0
    Finished,
}

/// Maps elapsed clock time onto frame indices.
/// Frames are derived from elapsed time, not counted per tick, so a slow
/// host skips frames rather than slowing the animation down.
pub struct PlaybackController<C:Clock> {
    clock:C,
    duration:f64,
    sample_count:usize,
    current_frame:usize,
    mode:PlaybackMode,
    start_time:Option<f64>,
    paused_time:Option<f64>,
}

impl<C:Clock> PlaybackController<C> {

    /// duration must be positive and sample_count at least 1
    pub fn new(clock:C,duration:f64,sample_count:usize) -> Self {
        Self {
            clock,
            duration,
            sample_count,
            current_frame:0,
            mode:PlaybackMode::Stopped,
            start_time:None,
            paused_time:None,
        }
    }

    pub fn start(&mut self) {
        let now = self.clock.now();
        match self.mode {
            PlaybackMode::Running => return,
            PlaybackMode::Paused => {
                let paused_at = self.paused_time.take().unwrap_or(now);
                let start = self.start_time.unwrap_or(paused_at);
                self.start_time = Some(start + (now - paused_at));
                info!("resuming playback at frame {}",self.current_frame);
            }
            PlaybackMode::Stopped => {
                self.start_time = Some(now);
                self.paused_time = None;
                info!("starting playback");
            }
        }
        self.mode = PlaybackMode::Running;
    }

    pub fn pause(&mut self) {
        if self.mode != PlaybackMode::Running {
            return
        }
        self.paused_time = Some(self.clock.now());
        self.mode = PlaybackMode::Paused;
        info!("paused at frame {}",self.current_frame);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.mode != PlaybackMode::Running {
            return TickOutcome::Idle
        }
        let start = match self.start_time {
            Some(t) => t,
            None => return TickOutcome::Idle,
        };
        let elapsed = (self.clock.now() - start).max(0.0);
        let raw = self.raw_frame(elapsed);
        debug!("tick: elapsed {:.3} s -> frame {}",elapsed,raw);
        // a late tick can land past the end; that still ends the run instead of wrapping
        if raw >= self.last_index() {
            self.reset();
            return TickOutcome::Finished
        }
        self.current_frame = raw % self.sample_count.max(1);
        TickOutcome::Advanced(self.current_frame)
    }

    /// Back to Stopped at frame 0. The caller redraws frame 0 and stops ticking
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.mode = PlaybackMode::Stopped;
        self.start_time = None;
        self.paused_time = None;
        info!("playback reset");
    }

    /// floor(elapsed / duration * sample_count) mod sample_count
    pub fn frame_for_elapsed(&self,elapsed:f64) -> usize {
        self.raw_frame(elapsed) % self.sample_count.max(1)
    }

    fn raw_frame(&self,elapsed:f64) -> usize {
        // float to int casts saturate
        ((elapsed/self.duration)*(self.sample_count as f64)).floor() as usize
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == PlaybackMode::Running
    }

    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    pub fn paused_time(&self) -> Option<f64> {
        self.paused_time
    }

    fn last_index(&self) -> usize {
        self.sample_count.saturating_sub(1)
    }
}
