use glam::IVec3;

/// Integer lattice coordinate owned by a single walker.
pub type Position3 = IVec3;

/// One of the three lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Axis> {
        Axis::ALL.get(index).copied()
    }

    #[inline]
    pub fn unit(self) -> IVec3 {
        match self {
            Axis::X => IVec3::X,
            Axis::Y => IVec3::Y,
            Axis::Z => IVec3::Z,
        }
    }
}

/// A single lattice move: `direction` in {-1, 0, +1} along `axis`.
///
/// A zero direction is a legal outcome and leaves the position unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepDelta {
    pub axis: Axis,
    pub direction: i32,
}

impl StepDelta {
    /// Build a delta, clamping `direction` into {-1, 0, +1}.
    pub fn new(axis: Axis, direction: i32) -> Self {
        Self {
            axis,
            direction: direction.signum(),
        }
    }

    #[inline]
    pub fn offset(self) -> IVec3 {
        self.axis.unit() * self.direction
    }

    #[inline]
    pub fn is_noop(self) -> bool {
        self.direction == 0
    }
}

/// Sum of absolute per-axis differences.
#[inline]
pub fn manhattan(a: Position3, b: Position3) -> i32 {
    let d = (a - b).abs();
    d.x + d.y + d.z
}
