// extensions/tween.rs
//
// Camera tween — moves the camera eye along a straight line over a fixed
// number of frames, re-aiming at a look-at point on every step.
//
// Usage:
//   let mut tween = CameraTween::new(40);
//   tween.start(&mut camera, end, look_at);  // runs the first step immediately
//   tween.step(&mut camera);                 // once per frame afterwards

use glam::Vec3;
use crate::renderer::camera::Camera3D;

/// Frames a camera flight takes by default.
pub const DEFAULT_TWEEN_FRAMES: u32 = 40;

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise linear interpolation between two points.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

/// Tween state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TweenPhase {
    #[default]
    Idle,
    Animating {
        start: Vec3,
        end: Vec3,
        look_at: Vec3,
        /// Steps taken so far.
        frame: u32,
    },
}

/// Outcome of a single tween step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep {
    /// Nothing in flight; the camera was not touched.
    Idle,
    /// Moved to fraction `t` of the way; more steps follow.
    Running(f32),
    /// Landed on the end position this step; the tween is now idle.
    Finished,
}

/// At most one camera flight at a time. Starting a new one discards the old.
#[derive(Debug, Clone)]
pub struct CameraTween {
    phase: TweenPhase,
    duration_frames: u32,
}

impl Default for CameraTween {
    fn default() -> Self {
        Self::new(DEFAULT_TWEEN_FRAMES)
    }
}

impl CameraTween {
    pub fn new(duration_frames: u32) -> Self {
        Self {
            phase: TweenPhase::Idle,
            duration_frames: duration_frames.max(1),
        }
    }

    /// Begin a flight from the camera's live position to `end`, aiming at `look_at`.
    /// Any flight in progress is dropped. The first step is applied immediately.
    pub fn start(&mut self, camera: &mut Camera3D, end: Vec3, look_at: Vec3) -> TweenStep {
        self.phase = TweenPhase::Animating {
            start: camera.position,
            end,
            look_at,
            frame: 0,
        };
        self.step(camera)
    }

    /// Advance one frame.
    pub fn step(&mut self, camera: &mut Camera3D) -> TweenStep {
        let TweenPhase::Animating { start, end, look_at, frame } = self.phase else {
            return TweenStep::Idle;
        };

        let frame = frame + 1;
        let t = (frame as f32 / self.duration_frames as f32).min(1.0);
        camera.look_at(look_at);

        if t >= 1.0 {
            camera.position = end;
            self.phase = TweenPhase::Idle;
            return TweenStep::Finished;
        }

        camera.position = lerp_vec3(start, end, t);
        self.phase = TweenPhase::Animating { start, end, look_at, frame };
        TweenStep::Running(t)
    }

    /// Drop the flight in progress, leaving the camera where it is.
    pub fn cancel(&mut self) {
        self.phase = TweenPhase::Idle;
    }

    pub fn phase(&self) -> TweenPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, TweenPhase::Animating { .. })
    }

    pub fn duration_frames(&self) -> u32 {
        self.duration_frames
    }
}
