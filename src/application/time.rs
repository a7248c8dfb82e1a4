//! Timing and stepping system.

use std::cmp;
use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use super::settings::EngineParams;

/// Measures the duration of frames, and throttles the main loop.
pub struct TimeSystem {
    min_fps: u32,
    max_fps: u32,
    smoothing_step: usize,
    timestep: Duration,
    previous_timesteps: VecDeque<Duration>,
    last_frame_timepoint: Instant,
}

impl TimeSystem {
    pub fn new(params: &EngineParams) -> Self {
        TimeSystem {
            min_fps: params.min_fps,
            max_fps: params.max_fps,
            smoothing_step: params.time_smooth_step as usize,
            timestep: Duration::new(0, 0),
            previous_timesteps: VecDeque::new(),
            last_frame_timepoint: Instant::now(),
        }
    }

    /// Starts a new frame, and returns the timestep of the previous one.
    pub fn advance(&mut self) -> Duration {
        // Perform waiting loop if maximum fps set, cooperatively gives up
        // a timeslice to the OS scheduler.
        if self.max_fps > 0 {
            let td = Duration::from_millis(u64::from(1000 / self.max_fps));
            while self.last_frame_timepoint.elapsed() <= td {
                if (self.last_frame_timepoint.elapsed() + Duration::from_millis(2)) < td {
                    thread::sleep(Duration::from_millis(1));
                } else {
                    thread::yield_now();
                }
            }
        }

        let mut elapsed = self.last_frame_timepoint.elapsed();
        self.last_frame_timepoint = Instant::now();

        // If fps lower than minimum, simply clamp it.
        if self.min_fps > 0 {
            elapsed = cmp::min(
                elapsed,
                Duration::from_millis(u64::from(1000 / self.min_fps)),
            );
        }

        // Perform timestep smoothing.
        if self.smoothing_step > 0 {
            self.previous_timesteps.push_front(elapsed);
            self.previous_timesteps.truncate(self.smoothing_step);

            let total = self
                .previous_timesteps
                .iter()
                .fold(Duration::new(0, 0), |acc, v| acc + *v);
            self.timestep = total / self.previous_timesteps.len() as u32;
        } else {
            self.timestep = elapsed;
        }

        self.timestep
    }

    /// Set minimum frames per second. If fps goes lower than this, time will
    /// appear to slow.
    #[inline]
    pub fn set_min_fps(&mut self, fps: u32) {
        self.min_fps = fps;
    }

    /// Set maximum frames per second. The main loop will sleep if fps is higher
    /// than this for less resource(e.g. power) consumptions.
    #[inline]
    pub fn set_max_fps(&mut self, fps: u32) {
        self.max_fps = fps;
    }

    /// Set how many frames to average for timestep smoothing.
    #[inline]
    pub fn set_time_smoothing_step(&mut self, step: u32) {
        self.smoothing_step = step as usize;
        self.previous_timesteps.truncate(self.smoothing_step);
    }

    /// Gets current fps.
    pub fn fps(&self) -> u32 {
        let nanos = self.timestep.as_secs() * 1_000_000_000 + u64::from(self.timestep.subsec_nanos());
        if nanos == 0 {
            0
        } else {
            (1_000_000_000 / nanos) as u32
        }
    }

    /// Gets the duration of last frame.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.timestep
    }
}
