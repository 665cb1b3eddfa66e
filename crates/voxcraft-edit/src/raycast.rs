use voxcraft_blocks::{BlockPos, Face, MaterialKind};
use voxcraft_geom::{Ray, Vec3};
use voxcraft_world::WorldStore;

/// Upper bound for grid walks so an unbounded reach still terminates.
pub const MAX_REACH: f32 = 4096.0;

/// Nearest block struck by a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetHit {
    pub pos: BlockPos,
    pub material: MaterialKind,
    pub face: Face,
    /// Point on the cube surface where the ray entered (or left, when the
    /// origin sits inside the cube).
    pub point: Vec3,
    pub distance: f32,
}

impl TargetHit {
    /// Empty-side neighbor across the struck face. `None` when the struck
    /// cell sits on the edge of the i32 grid and the face points outward.
    #[inline]
    pub fn place_pos(&self) -> Option<BlockPos> {
        self.pos.offset(self.face)
    }
}

/// Face of the cube at `center` that contains `point`: dominant axis of
/// `point - center`, ties resolved x, then y, then z.
pub fn face_from_hit(center: Vec3, point: Vec3) -> Face {
    let d = point - center;
    let a = d.abs();
    if a.x >= a.y && a.x >= a.z {
        Face::from_axis(0, d.x)
    } else if a.y >= a.z {
        Face::from_axis(1, d.y)
    } else {
        Face::from_axis(2, d.z)
    }
}

/// Slab-test a single cell.
pub fn hit_cell(ray: &Ray, pos: BlockPos, material: MaterialKind) -> Option<TargetHit> {
    let point = pos.bounds().ray_hit(ray)?;
    Some(TargetHit {
        pos,
        material,
        face: face_from_hit(pos.center(), point),
        point,
        distance: ray.origin.distance(point),
    })
}

#[inline]
fn closer(candidate: &TargetHit, current: &TargetHit) -> bool {
    candidate.distance < current.distance
        || (candidate.distance == current.distance && candidate.pos < current.pos)
}

/// Test every block in the world and keep the nearest hit. Equal distances go
/// to the lexicographically lowest coordinate so results do not depend on map
/// iteration order. A zero direction never hits.
pub fn resolve(ray: &Ray, world: &WorldStore) -> Option<TargetHit> {
    let ray = ray.normalized()?;
    let mut best: Option<TargetHit> = None;
    for b in world.blocks() {
        let Some(hit) = hit_cell(&ray, b.pos, b.material) else {
            continue;
        };
        if best.as_ref().is_none_or(|cur| closer(&hit, cur)) {
            best = Some(hit);
        }
    }
    best
}

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

#[inline]
fn step_sign(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Walk cells along the ray in entry order and stop at the first occupied
/// one within `max_distance`. Visits only cells on the ray, so cost follows
/// reach rather than world size. Hit point and face use the same rules as
/// [`resolve`]; an origin inside an occupied cell reports that cell.
pub fn resolve_traversal(ray: &Ray, max_distance: f32, world: &WorldStore) -> Option<TargetHit> {
    let ray = ray.normalized()?;
    if !(max_distance > 0.0) {
        return None;
    }
    let max_distance = max_distance.min(MAX_REACH);
    let d = ray.dir;
    // Cell faces sit on half-integers; shift so they land on integers.
    let o = ray.origin + Vec3::SPLAT_HALF;

    let mut vx = o.x.floor() as i32;
    let mut vy = o.y.floor() as i32;
    let mut vz = o.z.floor() as i32;

    let stepx = step_sign(d.x);
    let stepy = step_sign(d.y);
    let stepz = step_sign(d.z);

    let invx = inv_or_max(d.x);
    let invy = inv_or_max(d.y);
    let invz = inv_or_max(d.z);
    let tdx = if stepx == 0 { f32::MAX } else { invx };
    let tdy = if stepy == 0 { f32::MAX } else { invy };
    let tdz = if stepz == 0 { f32::MAX } else { invz };

    let fx = o.x - o.x.floor();
    let fy = o.y - o.y.floor();
    let fz = o.z - o.z.floor();
    let mut tmx = if stepx > 0 { (1.0 - fx) * invx } else if stepx < 0 { fx * invx } else { f32::MAX };
    let mut tmy = if stepy > 0 { (1.0 - fy) * invy } else if stepy < 0 { fy * invy } else { f32::MAX };
    let mut tmz = if stepz > 0 { (1.0 - fz) * invz } else if stepz < 0 { fz * invz } else { f32::MAX };

    let mut t = 0.0f32;
    // Each unit of travel crosses at most three cell faces.
    let max_steps = (max_distance.ceil() as usize + 1) * 3;
    for _ in 0..max_steps {
        if t > max_distance {
            break;
        }
        let pos = BlockPos::new(vx, vy, vz);
        if let Some(hit) = world.get(pos).and_then(|m| hit_cell(&ray, pos, m)) {
            return (hit.distance <= max_distance).then_some(hit);
        }
        // Stepping off the i32 grid ends the walk; no cell lies beyond it.
        if tmx < tmy {
            if tmx < tmz { vx = vx.checked_add(stepx)?; t = tmx; tmx += tdx; } else { vz = vz.checked_add(stepz)?; t = tmz; tmz += tdz; }
        } else if tmy < tmz {
            vy = vy.checked_add(stepy)?; t = tmy; tmy += tdy;
        } else {
            vz = vz.checked_add(stepz)?; t = tmz; tmz += tdz;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(pos: BlockPos) -> WorldStore {
        let mut w = WorldStore::new();
        w.add(pos, MaterialKind::Stone).unwrap();
        w
    }

    #[test]
    fn face_ties_prefer_x_then_y() {
        let c = Vec3::ZERO;
        assert_eq!(face_from_hit(c, Vec3::new(0.5, 0.5, 0.5)), Face::PosX);
        assert_eq!(face_from_hit(c, Vec3::new(0.1, -0.5, 0.5)), Face::NegY);
        assert_eq!(face_from_hit(c, Vec3::new(0.1, 0.2, -0.5)), Face::NegZ);
    }

    #[test]
    fn zero_direction_misses() {
        let w = single(BlockPos::ORIGIN);
        let r = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(resolve(&r, &w).is_none());
        assert!(resolve_traversal(&r, 10.0, &w).is_none());
    }

    #[test]
    fn traversal_respects_reach() {
        let w = single(BlockPos::new(0, 0, -20));
        let r = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(resolve_traversal(&r, 5.0, &w).is_none());
        let hit = resolve_traversal(&r, 25.0, &w).unwrap();
        assert_eq!(hit.pos, BlockPos::new(0, 0, -20));
        assert_eq!(hit.face, Face::PosZ);
        assert!((hit.distance - 19.5).abs() < 1e-4);
    }

    #[test]
    fn edge_cell_has_no_outward_neighbor() {
        let edge = BlockPos::new(0, i32::MIN, 0);
        let hit = TargetHit {
            pos: edge,
            material: MaterialKind::Stone,
            face: Face::NegY,
            point: Vec3::ZERO,
            distance: 1.0,
        };
        assert_eq!(hit.place_pos(), None);
        let up = TargetHit { face: Face::PosY, ..hit };
        assert_eq!(up.place_pos(), Some(BlockPos::new(0, i32::MIN + 1, 0)));
    }

    #[test]
    fn unscaled_direction_gives_same_hit() {
        let w = single(BlockPos::ORIGIN);
        let a = resolve(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0)), &w);
        let b = resolve(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -7.5)), &w);
        assert_eq!(a, b);
    }

    #[test]
    fn equal_distance_goes_to_lowest_coordinate() {
        // Ray runs exactly along the shared face of two cells.
        let mut w = WorldStore::new();
        w.add(BlockPos::new(0, 0, 0), MaterialKind::Stone).unwrap();
        w.add(BlockPos::new(1, 0, 0), MaterialKind::Wood).unwrap();
        let r = Ray::new(Vec3::new(0.5, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = resolve(&r, &w).unwrap();
        assert_eq!(hit.pos, BlockPos::new(0, 0, 0));
    }
}
