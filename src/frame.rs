use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock was created
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Wall-clock source of [`FrameInfo`], one tick per rendered frame
#[derive(Debug)]
pub struct FrameClock {
    next_number: u64,
    start: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            next_number: 0,
            start: now,
            last_tick: now,
        }
    }

    /// Number of frames ticked so far
    pub fn frames_elapsed(&self) -> u64 {
        self.next_number
    }

    /// Close the current frame and describe it
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo::new(
            self.next_number,
            now.duration_since(self.start).as_secs_f32(),
            now.duration_since(self.last_tick).as_secs_f32(),
        );

        self.next_number += 1;
        self.last_tick = now;
        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a fixed reporting interval
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Record one frame. Returns the new average when an interval completes.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < self.interval {
            return None;
        }

        self.fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    /// Last reported average (0 until the first interval completes)
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
