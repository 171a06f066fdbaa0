//! Static house geometry: rooms, outer bounds, and floor discretization.

use glam::DVec3;

/// Axis-aligned rectangular room used for containment queries.
#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    /// Floor index (0 = ground floor).
    pub floor: u32,
    pub x_min: f64,
    pub x_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl Room {
    /// Check whether a position lies within the room's horizontal bounds and
    /// the vertical slab of its floor.
    pub fn contains(&self, position: DVec3) -> bool {
        let floor_base = f64::from(self.floor) * FLOOR_HEIGHT;
        self.x_min <= position.x
            && position.x <= self.x_max
            && self.z_min <= position.z
            && position.z <= self.z_max
            && position.y >= floor_base
            && position.y <= floor_base + FLOOR_HEIGHT
    }
}

/// Vertical extent of one storey.
pub const FLOOR_HEIGHT: f64 = 3.0;

/// Two-storey, eight-room house description used for navigation.
///
/// Built once by [`standard_layout`] at game start and immutable afterwards.
#[derive(Debug, Clone)]
pub struct HouseLayout {
    pub rooms: Vec<Room>,
    pub bounds_x: f64,
    pub bounds_z: f64,
    pub floor_height: f64,
}

/// Build the standard two-storey house: 2 floors of a 2x2 grid of 6x8 rooms.
///
/// The clamp bounds are the half extents of a single room cell, not of the
/// full grid, so positions are constrained to a footprint much smaller than
/// the rooms span. Level scripts and tests depend on this footprint; widening
/// it changes every perimeter spawn position.
pub fn standard_layout() -> HouseLayout {
    const WIDTH: f64 = 6.0;
    const DEPTH: f64 = 8.0;
    const NAMES: [[&str; 2]; 4] = [
        ["Kitchen", "Dining"],
        ["Living", "Study"],
        ["Bedroom", "Bathroom"],
        ["Guest", "Storage"],
    ];

    let mut rooms = Vec::with_capacity(8);
    for floor in 0..2u32 {
        for row in 0..2usize {
            for col in 0..2usize {
                let label = NAMES[floor as usize * 2 + row][col];
                let x_min = -WIDTH + col as f64 * WIDTH;
                let z_min = -DEPTH + row as f64 * DEPTH;
                rooms.push(Room {
                    name: format!("{} (Floor {})", label, floor + 1),
                    floor,
                    x_min,
                    x_max: x_min + WIDTH,
                    z_min,
                    z_max: z_min + DEPTH,
                });
            }
        }
    }

    HouseLayout {
        rooms,
        bounds_x: WIDTH,
        bounds_z: DEPTH,
        floor_height: FLOOR_HEIGHT,
    }
}

impl HouseLayout {
    /// Clamp a position into the house footprint.
    ///
    /// X/Z are clamped to the outer bounds; Y snaps to the nearest of the two
    /// discrete floor levels plus a 0.5 standing offset.
    pub fn constrain(&self, position: DVec3) -> DVec3 {
        let x = position.x.clamp(-self.bounds_x, self.bounds_x);
        let z = position.z.clamp(-self.bounds_z, self.bounds_z);
        let floor = (position.y / self.floor_height).round().clamp(0.0, 1.0);
        DVec3::new(x, floor * self.floor_height + 0.5, z)
    }

    /// Bounds check on the horizontal plane only.
    pub fn is_inside(&self, position: DVec3) -> bool {
        (-self.bounds_x..=self.bounds_x).contains(&position.x)
            && (-self.bounds_z..=self.bounds_z).contains(&position.z)
    }

    /// Where the player starts.
    pub fn spawn_point(&self) -> DVec3 {
        DVec3::new(0.0, 0.5, 0.0)
    }
}
