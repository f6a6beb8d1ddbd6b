// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Aggregation of per-frame render statistics into periodic summaries.

use std::fmt;
use std::time::Duration;

use crate::renderer::RenderStats;
use crate::utils::Stopwatch;

/// Averages collected over one telemetry window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameSummary {
    /// Frames rendered in the window.
    pub frames: u64,
    /// Average CPU time per frame, in milliseconds.
    pub average_cpu_ms: f32,
    /// Frames per second over the window.
    pub fps: f64,
    /// Triangles submitted by the last frame of the window.
    pub triangles_per_frame: u32,
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames, {:.1} FPS, {:.3} ms CPU/frame, {} triangles/frame",
            self.frames, self.fps, self.average_cpu_ms, self.triangles_per_frame
        )
    }
}

/// Collects [`RenderStats`] and reports a [`FrameSummary`] every `interval`.
///
/// A zero interval disables reporting: [`tick`](Self::tick) never fires.
#[derive(Debug)]
pub struct FrameTelemetry {
    interval: Duration,
    window: Stopwatch,
    frames: u64,
    cpu_ms_total: f64,
    last_triangles: u32,
}

impl FrameTelemetry {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window: Stopwatch::new(),
            frames: 0,
            cpu_ms_total: 0.0,
            last_triangles: 0,
        }
    }

    /// Adds one rendered frame to the current window.
    pub fn record(&mut self, stats: &RenderStats) {
        self.frames += 1;
        self.cpu_ms_total += stats.cpu_total_time_ms() as f64;
        self.last_triangles = stats.triangles_rendered;
    }

    /// Returns `true` once the current window has lasted at least `interval`.
    pub fn tick(&self) -> bool {
        !self.interval.is_zero() && self.window.elapsed() >= self.interval
    }

    /// Summarizes the current window and starts a new one.
    pub fn summary(&mut self) -> FrameSummary {
        let elapsed = self.window.elapsed_secs_f64();
        let summary = FrameSummary {
            frames: self.frames,
            average_cpu_ms: if self.frames == 0 {
                0.0
            } else {
                (self.cpu_ms_total / self.frames as f64) as f32
            },
            fps: if elapsed > 0.0 {
                self.frames as f64 / elapsed
            } else {
                0.0
            },
            triangles_per_frame: self.last_triangles,
        };

        self.window.restart();
        self.frames = 0;
        self.cpu_ms_total = 0.0;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn stats(prep: f32, submit: f32) -> RenderStats {
        RenderStats {
            cpu_preparation_time_ms: prep,
            cpu_render_submission_time_ms: submit,
            draw_calls: 1,
            triangles_rendered: 131_066,
            ..Default::default()
        }
    }

    #[test]
    fn summary_averages_and_resets() {
        let mut telemetry = FrameTelemetry::new(Duration::from_secs(5));
        telemetry.record(&stats(1.0, 1.0));
        telemetry.record(&stats(3.0, 1.0));

        let summary = telemetry.summary();
        assert_eq!(summary.frames, 2);
        assert_eq!(summary.average_cpu_ms, 3.0);
        assert_eq!(summary.triangles_per_frame, 131_066);
        assert!(summary.fps > 0.0);

        let empty = telemetry.summary();
        assert_eq!(empty.frames, 0);
        assert_eq!(empty.average_cpu_ms, 0.0);
    }

    #[test]
    fn tick_fires_after_interval() {
        let telemetry = FrameTelemetry::new(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(20));
        assert!(telemetry.tick());
    }

    #[test]
    fn zero_interval_never_ticks() {
        let telemetry = FrameTelemetry::new(Duration::ZERO);
        assert!(!telemetry.tick());
    }

    #[test]
    fn summary_display() {
        let summary = FrameSummary {
            frames: 300,
            average_cpu_ms: 1.25,
            fps: 60.0,
            triangles_per_frame: 10,
        };
        assert_eq!(
            summary.to_string(),
            "300 frames, 60.0 FPS, 1.250 ms CPU/frame, 10 triangles/frame"
        );
    }
}
