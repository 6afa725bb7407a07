/// Frames rendered over one reporting interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsReport {
    pub frames: u32,
    /// Seconds covered by this report. At least the configured interval.
    pub elapsed: f64,
}

/// Delta-time measurement and periodic throughput counting.
///
/// Times are monotonic seconds as returned by the platform clock.
#[derive(Debug, Clone)]
pub struct FramePacer {
    previous: f64,
    report_time: f64,
    report_interval: f64,
    frames: u32,
}

impl FramePacer {
    pub fn new(start: f64, report_interval: f64) -> Self {
        Self {
            previous: start,
            report_time: start,
            report_interval,
            frames: 0,
        }
    }

    /// Start a frame at `now`, returning the seconds since the previous one.
    ///
    /// The delta is not clamped: a stalled frame yields a large delta. A clock
    /// that steps backwards yields zero rather than a negative value.
    pub fn begin_frame(&mut self, now: f64) -> f32 {
        let delta = (now - self.previous).max(0.0);
        self.previous = now;
        delta as f32
    }

    /// Count a finished frame started at `now`.
    ///
    /// Returns a report once at least one interval has passed since the last
    /// report, after which the counter starts again from zero.
    pub fn end_frame(&mut self, now: f64) -> Option<FpsReport> {
        self.frames = self.frames.saturating_add(1);
        let elapsed = now - self.report_time;
        if elapsed < self.report_interval {
            return None;
        }
        let report = FpsReport {
            frames: self.frames,
            elapsed,
        };
        self.frames = 0;
        self.report_time = now;
        Some(report)
    }

    /// Frames counted since the last report.
    pub fn pending_frames(&self) -> u32 {
        self.frames
    }
}
