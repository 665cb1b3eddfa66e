use std::fmt;

use serde::{Deserialize, Serialize};
use voxcraft_geom::{Aabb, Vec3};

use crate::material::MaterialKind;

/// Integer cell coordinate. A cell is the unit cube centered on the coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos::new(0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn center(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    #[inline]
    pub fn bounds(self) -> Aabb {
        let c = self.center();
        Aabb::new(c - Vec3::SPLAT_HALF, c + Vec3::SPLAT_HALF)
    }

    /// Cell whose cube contains `p` (faces at half-integers).
    #[inline]
    pub fn containing(p: Vec3) -> BlockPos {
        BlockPos::new(
            (p.x + 0.5).floor() as i32,
            (p.y + 0.5).floor() as i32,
            (p.z + 0.5).floor() as i32,
        )
    }

    /// Neighboring cell across `face`, or `None` past the edge of the i32 grid.
    #[inline]
    pub fn offset(self, face: Face) -> Option<BlockPos> {
        let (dx, dy, dz) = face.delta();
        Some(BlockPos::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Block {
    pub pos: BlockPos,
    pub material: MaterialKind,
}

impl Block {
    #[inline]
    pub const fn new(pos: BlockPos, material: MaterialKind) -> Self {
        Self { pos, material }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY,
    NegY,
    PosX,
    NegX,
    PosZ,
    NegZ,
}

impl Face {
    /// Face pointing along `axis` (0 = x, 1 = y, else z) with the sign of
    /// `sign`. Zero counts as positive.
    #[inline]
    pub fn from_axis(axis: usize, sign: f32) -> Face {
        let pos = sign >= 0.0;
        match (axis, pos) {
            (0, true) => Face::PosX,
            (0, false) => Face::NegX,
            (1, true) => Face::PosY,
            (1, false) => Face::NegY,
            (_, true) => Face::PosZ,
            (_, false) => Face::NegZ,
        }
    }

    /// Grid step when leaving the cube through this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        let (x, y, z) = self.delta();
        Vec3::new(x as f32, y as f32, z as f32)
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }
}
