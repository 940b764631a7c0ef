/// Variable-step frame clock.
///
/// The host hands us the wall-clock delta of each display refresh. Orbits
/// integrate that delta directly, so the clock only guards against the huge
/// deltas a backgrounded tab produces when it wakes up.
pub struct FrameClock {
    /// Largest delta a single frame may report.
    max_dt: f32,
    /// Total time reported so far.
    elapsed: f64,
    /// Frames ticked so far.
    frames: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Register one frame and return the delta to simulate.
    /// Negative and non-finite inputs count as zero.
    pub fn tick(&mut self, frame_dt: f32) -> f32 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        self.elapsed += dt as f64;
        self.frames += 1;
        dt
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_normal_deltas_through() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.tick(1.0 / 60.0), 1.0 / 60.0);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn caps_large_deltas() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.tick(3.0), 0.25);
        assert!((clock.elapsed() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn rejects_negative_and_nan() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.tick(-1.0), 0.0);
        assert_eq!(clock.tick(f32::NAN), 0.0);
        assert_eq!(clock.frames(), 2);
    }
}
