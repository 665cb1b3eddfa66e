use std::f32::consts::{FRAC_PI_2, PI};

use voxcraft_geom::{Ray, Vec3};

/// Eye position plus yaw/pitch in radians. Roll is always zero.
///
/// Yaw 0 looks down -Z; positive yaw turns toward -X. Pitch is positive
/// looking up and stays within [-π/2, π/2].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraPose {
    /// Session spawn: five units up, ten back along +Z, looking further along +Z.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 10.0),
            yaw: PI,
            pitch: 0.0,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: clamp_pitch(pitch),
        }
    }

    pub fn forward(&self) -> Vec3 {
        let (ys, yc) = self.yaw.sin_cos();
        let (ps, pc) = self.pitch.sin_cos();
        Vec3::new(-ys * pc, ps, -yc * pc).normalized()
    }

    /// Forward projected onto the ground plane.
    pub fn flat_forward(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, -1.0).rotated_y(self.yaw)
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0).rotated_y(self.yaw)
    }

    /// Ray through the center of the view, used for block targeting.
    pub fn view_ray(&self) -> Ray {
        Ray::new(self.position, self.forward())
    }
}

#[inline]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-FRAC_PI_2, FRAC_PI_2)
}
