use serde::Deserialize;
use voxcraft_geom::Vec3;

use crate::camera::{CameraPose, clamp_pitch};

/// One tick's worth of input, taken as a single snapshot before integrating.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Accumulated pointer motion since the previous tick, in raw device units.
    pub look_dx: f32,
    pub look_dy: f32,
}

impl MoveInput {
    /// Planar intent in camera space: +X right, -Z forward. Unit length or zero.
    pub fn planar_intent(&self) -> Vec3 {
        let axis = |pos: bool, neg: bool| (pos as i32 - neg as i32) as f32;
        Vec3::new(axis(self.right, self.left), 0.0, axis(self.backward, self.forward)).normalized()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MovementParams {
    /// Horizontal speed in units per second.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Upward speed while the jump key is held below the gate.
    #[serde(default = "default_jump_speed")]
    pub jump_speed: f32,
    /// Jump only applies while `position.y` is at or below this height.
    #[serde(default = "default_jump_gate_height")]
    pub jump_gate_height: f32,
    /// Eye height never drops below this.
    #[serde(default = "default_ground_min")]
    pub ground_min: f32,
    /// Downward speed applied when not jumping. Zero keeps height.
    #[serde(default)]
    pub gravity: f32,
    /// Radians per pointer unit at sensitivity 1.0.
    #[serde(default = "default_look_scale")]
    pub look_scale: f32,
}

fn default_speed() -> f32 {
    10.0
}
fn default_jump_speed() -> f32 {
    5.0
}
fn default_jump_gate_height() -> f32 {
    5.5
}
fn default_ground_min() -> f32 {
    3.0
}
fn default_look_scale() -> f32 {
    0.002
}

impl Default for MovementParams {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            jump_speed: default_jump_speed(),
            jump_gate_height: default_jump_gate_height(),
            ground_min: default_ground_min(),
            gravity: 0.0,
            look_scale: default_look_scale(),
        }
    }
}

impl MovementParams {
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("speed", self.speed),
            ("jump_speed", self.jump_speed),
            ("jump_gate_height", self.jump_gate_height),
            ("ground_min", self.ground_min),
            ("gravity", self.gravity),
            ("look_scale", self.look_scale),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(format!("movement.{} must be finite", name));
            }
        }
        if self.speed < 0.0 || self.jump_speed < 0.0 || self.gravity < 0.0 {
            return Err("movement speeds and gravity must not be negative".into());
        }
        if self.look_scale <= 0.0 {
            return Err("movement.look_scale must be positive".into());
        }
        Ok(())
    }
}

/// Kinematic first-person integrator.
#[derive(Clone, Debug, Default)]
pub struct Walker {
    pub params: MovementParams,
}

impl Walker {
    pub fn new(params: MovementParams) -> Self {
        Self { params }
    }

    /// Advance `pose` by one tick: orientation first, then position.
    /// A non-positive or non-finite `dt` only applies the look delta.
    pub fn tick(&self, pose: &mut CameraPose, input: &MoveInput, sensitivity: f32, dt: f32) {
        self.look(pose, input, sensitivity);
        if dt > 0.0 && dt.is_finite() {
            self.translate(pose, input, dt);
        }
    }

    pub fn look(&self, pose: &mut CameraPose, input: &MoveInput, sensitivity: f32) {
        let k = sensitivity * self.params.look_scale;
        if !k.is_finite() || !input.look_dx.is_finite() || !input.look_dy.is_finite() {
            return;
        }
        pose.yaw -= input.look_dx * k;
        pose.pitch = clamp_pitch(pose.pitch - input.look_dy * k);
    }

    fn translate(&self, pose: &mut CameraPose, input: &MoveInput, dt: f32) {
        let p = &self.params;
        // Yaw only: looking up or down never tilts walking.
        let planar = input.planar_intent().rotated_y(pose.yaw);
        pose.position.x += planar.x * p.speed * dt;
        pose.position.z += planar.z * p.speed * dt;

        if input.jump && pose.position.y <= p.jump_gate_height {
            pose.position.y += p.jump_speed * dt;
        } else {
            pose.position.y -= p.gravity * dt;
        }
        if pose.position.y < p.ground_min {
            pose.position.y = p.ground_min;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn pose_at(x: f32, y: f32, z: f32) -> CameraPose {
        CameraPose::new(Vec3::new(x, y, z), 0.0, 0.0)
    }

    #[test]
    fn forward_moves_down_negative_z_at_zero_yaw() {
        let w = Walker::default();
        let mut pose = pose_at(0.0, 4.0, 0.0);
        let input = MoveInput { forward: true, ..Default::default() };
        w.tick(&mut pose, &input, 1.0, 0.5);
        assert!((pose.position.z + 5.0).abs() < 1e-5);
        assert!(pose.position.x.abs() < 1e-5);
    }

    #[test]
    fn diagonal_is_normalized() {
        let w = Walker::default();
        let mut pose = pose_at(0.0, 4.0, 0.0);
        let input = MoveInput { forward: true, right: true, ..Default::default() };
        w.tick(&mut pose, &input, 1.0, 1.0);
        let flat = Vec3::new(pose.position.x, 0.0, pose.position.z);
        assert!((flat.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn opposing_keys_cancel() {
        let w = Walker::default();
        let mut pose = pose_at(1.0, 4.0, 2.0);
        let input = MoveInput {
            forward: true,
            backward: true,
            left: true,
            right: true,
            ..Default::default()
        };
        w.tick(&mut pose, &input, 1.0, 1.0);
        assert_eq!(pose.position, Vec3::new(1.0, 4.0, 2.0));
    }

    #[test]
    fn pitch_does_not_tilt_walking() {
        let w = Walker::default();
        let mut pose = CameraPose::new(Vec3::new(0.0, 4.0, 0.0), FRAC_PI_2, FRAC_PI_2);
        let input = MoveInput { forward: true, ..Default::default() };
        w.tick(&mut pose, &input, 1.0, 0.1);
        assert_eq!(pose.position.y, 4.0);
        assert!((pose.position.x + 1.0).abs() < 1e-5);
    }

    #[test]
    fn jump_is_gated_by_height() {
        let w = Walker::default();
        let input = MoveInput { jump: true, ..Default::default() };
        let mut low = pose_at(0.0, 5.5, 0.0);
        w.tick(&mut low, &input, 1.0, 0.1);
        assert!((low.position.y - 6.0).abs() < 1e-5);
        let mut high = pose_at(0.0, 6.0, 0.0);
        w.tick(&mut high, &input, 1.0, 0.1);
        assert_eq!(high.position.y, 6.0);
    }

    #[test]
    fn gravity_pulls_down_to_ground() {
        let w = Walker::new(MovementParams { gravity: 9.0, ..Default::default() });
        let mut pose = pose_at(0.0, 4.0, 0.0);
        w.tick(&mut pose, &MoveInput::default(), 1.0, 1.0);
        assert_eq!(pose.position.y, 3.0);
    }

    #[test]
    fn look_turns_and_clamps() {
        let w = Walker::default();
        let mut pose = pose_at(0.0, 4.0, 0.0);
        let input = MoveInput { look_dx: 100.0, look_dy: -1.0e6, ..Default::default() };
        w.tick(&mut pose, &input, 0.5, 0.016);
        assert!((pose.yaw + 0.1).abs() < 1e-6);
        assert_eq!(pose.pitch, FRAC_PI_2);
    }

    #[test]
    fn bad_dt_only_looks() {
        let w = Walker::default();
        let mut pose = pose_at(0.0, 4.0, 0.0);
        let input = MoveInput { forward: true, look_dx: 10.0, ..Default::default() };
        w.tick(&mut pose, &input, 1.0, f32::NAN);
        w.tick(&mut pose, &input, 1.0, -1.0);
        assert_eq!(pose.position, Vec3::new(0.0, 4.0, 0.0));
        assert!(pose.yaw < 0.0);
    }

    #[test]
    fn params_from_toml_with_defaults() {
        let p: MovementParams = toml::from_str("speed = 4.0\ngravity = 2.5").unwrap();
        assert_eq!(p.speed, 4.0);
        assert_eq!(p.gravity, 2.5);
        assert_eq!(p.ground_min, 3.0);
        assert!(p.validate().is_ok());
        let bad = MovementParams { look_scale: 0.0, ..Default::default() };
        assert!(bad.validate().is_err());
    }
}
