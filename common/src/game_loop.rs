/// One accepted simulation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Number of ticks accepted before this one.
    pub elapsed: u64,
    /// Instantaneous rate estimate in ticks per second, derived from the gap
    /// to the previous accepted frame. Informational only: motion is advanced
    /// by a constant amount per tick and never scaled by this value.
    pub delta: f64,
}

/// Throttles a host-driven frame callback down to a fixed logical tick rate.
///
/// The host calls [`GameLoop::on_frame`] as often as it likes with a
/// monotonic millisecond timestamp; frames arriving before the target
/// interval has elapsed are dropped, not queued, so a burst of callbacks
/// never causes catch-up ticks. The same elapsed-time check also absorbs
/// frames arriving arbitrarily late or early under clock skew.
#[derive(Debug, Clone, PartialEq)]
pub struct GameLoop {
    frame_interval_ms: f64,
    last_tick_ms: Option<f64>,
    elapsed: u64,
    stopped: bool,
}

impl GameLoop {
    pub fn new(target_fps: u32) -> Self {
        GameLoop {
            frame_interval_ms: 1000.0 / target_fps.max(1) as f64,
            last_tick_ms: None,
            elapsed: 0,
            stopped: false,
        }
    }

    /// Host frame callback. Returns the tick to run, or `None` when this
    /// frame falls inside the throttle window. The first frame after
    /// construction is always accepted.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<Tick> {
        if self.stopped {
            return None;
        }

        let delta = match self.last_tick_ms {
            Some(last) if now_ms < last + self.frame_interval_ms => return None,
            Some(last) if now_ms > last => 1000.0 / (now_ms - last),
            _ => 1000.0 / self.frame_interval_ms,
        };

        self.last_tick_ms = Some(now_ms);
        let tick = Tick {
            elapsed: self.elapsed,
            delta,
        };
        self.elapsed += 1;
        Some(tick)
    }

    /// Deregisters the loop: no tick is ever accepted again. Idempotent.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}
