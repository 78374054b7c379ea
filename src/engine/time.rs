use std::time::Instant;

pub struct FrameTimer {
    last: Instant,
    pub dt: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            dt: 0.0,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
    }
}

/// Fixed timestep accumulator. Frame deltas go in, whole simulation steps
/// come out, and the fractional remainder carries over to the next frame.
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        assert!(step > 0.0, "step length must be positive");
        Self {
            step,
            accumulator: 0.0,
        }
    }

    /// Add one frame's delta and return how many fixed steps are now due.
    /// The fractional remainder stays banked. There is no catch-up cap: a
    /// long stall owes every step it covers, which keeps simulated time
    /// equal to wall time at the cost of a burst of work after the stall.
    /// The delta must be finite; a NaN would sit in the accumulator and
    /// stop every future step.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        debug_assert!(frame_dt.is_finite(), "frame delta must be finite");
        self.accumulator += frame_dt;
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0.25 and its halves are exact in f32, so these tests can assert on
    // exact step counts with no epsilon.

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.25), 1);
        assert_eq!(ts.accumulate(0.25), 1);
    }

    #[test]
    fn short_frame_yields_no_step() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.125), 0);
        assert_eq!(ts.accumulate(0.125), 1);
    }

    #[test]
    fn leftover_carries_across_frames() {
        // Three half-step frames: the middle one completes a step and the
        // last half stays banked, so a fourth half-step frame completes
        // the next one.
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.125), 0);
        assert_eq!(ts.accumulate(0.125), 1);
        assert_eq!(ts.accumulate(0.125), 0);
        assert_eq!(ts.accumulate(0.125), 1);
    }

    #[test]
    fn step_count_is_chunking_independent() {
        let mut fine = FixedTimestep::new(0.25);
        let mut coarse = FixedTimestep::new(0.25);

        let mut fine_steps = 0;
        for _ in 0..8 {
            fine_steps += fine.accumulate(0.125);
        }
        let coarse_steps = coarse.accumulate(1.0);

        assert_eq!(fine_steps, 4);
        assert_eq!(coarse_steps, 4);
    }

    #[test]
    fn stall_bursts_every_owed_step() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(25.0), 100);
    }

    #[test]
    #[should_panic]
    fn zero_step_is_rejected() {
        FixedTimestep::new(0.0);
    }

    #[test]
    #[should_panic(expected = "frame delta must be finite")]
    fn non_finite_frame_delta_is_rejected() {
        // NaN never satisfies the step condition, so once absorbed it
        // would freeze the clock at zero steps for good.
        let mut ts = FixedTimestep::new(0.25);
        ts.accumulate(f32::NAN);
    }
}
