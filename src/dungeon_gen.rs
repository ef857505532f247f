use crate::cell::{Cell, CellType, FLOOR_VARIANTS};
use crate::constants::*;
use crate::difficulty::{DifficultyConfig, Tier};
use crate::grid::{GeneratedMap, MapGrid};
use log::info;
use rand::Rng;

/// An axis-aligned room rectangle. Rooms only live inside one generation
/// call; the returned map keeps no reference to them.
#[derive(Clone, Copy, Debug)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center coordinate, rounded down
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Overlap test with a fixed 1-cell expansion on each side: two rooms are
    /// clear of each other only when a full empty column or row separates
    /// their expanded rectangles.
    fn overlaps_padded(&self, other: &Room) -> bool {
        !(self.x + self.width + 1 < other.x
            || other.x + other.width + 1 < self.x
            || self.y + self.height + 1 < other.y
            || other.y + other.height + 1 < self.y)
    }

    /// A uniform-random coordinate strictly inside the border walls
    fn random_interior(&self, rng: &mut impl Rng) -> (i32, i32) {
        (
            self.x + rng.gen_range(1..self.width - 1),
            self.y + rng.gen_range(1..self.height - 1),
        )
    }
}

/// Objects Phase E scatters onto room floors
const OBJECT_PALETTE: [CellType; 5] = [
    CellType::Table,
    CellType::Chair,
    CellType::Bed,
    CellType::Chest,
    CellType::Torch,
];

/// Runs the generation pipeline: room placement, interior fill, corridor
/// carving, doors, then object and monster population. Every constraint is a
/// best-effort target — retry exhaustion truncates silently, it never fails.
pub struct MapGenerator {
    grid: MapGrid,
}

impl MapGenerator {
    fn new(width: i32, height: i32) -> Self {
        Self {
            grid: MapGrid::new(width, height),
        }
    }

    /// Generate a dungeon layout on a width×height grid. Randomness comes
    /// entirely from `rng`, so a seeded generator reproduces the layout.
    pub fn generate(width: i32, height: i32, tier: Tier, rng: &mut impl Rng) -> GeneratedMap {
        let cfg = tier.config();
        let mut gen = Self::new(width, height);

        let target_rooms = rng.gen_range(cfg.rooms.0..=cfg.rooms.1);
        let rooms = gen.place_rooms(target_rooms, rng);

        for room in &rooms {
            gen.fill_room(room, rng);
        }

        // Chain rooms in placement order; the dungeon is connected end to
        // end but has no alternate routes.
        for pair in rooms.windows(2) {
            gen.connect_rooms(&pair[0], &pair[1], rng);
        }

        gen.place_doors(&rooms, rng);
        gen.place_objects(&rooms, cfg.object_chance, rng);
        let monster_count = gen.place_monsters(&rooms, cfg, rng);

        info!(
            "generated {}x{} {} map: {} rooms, {} monsters, {} cells",
            width,
            height,
            tier.as_str(),
            rooms.len(),
            monster_count,
            gen.grid.len()
        );

        GeneratedMap {
            grid: gen.grid,
            room_count: rooms.len(),
            monster_count,
        }
    }

    /// Phase A: up to 100 independent trials per room slot. A trial fails if
    /// the room plus a 1-cell border cannot fit, or if it lands too close to
    /// an accepted room; a slot whose trials all fail is skipped, so the
    /// final count may be below target.
    fn place_rooms(&self, target: u32, rng: &mut impl Rng) -> Vec<Room> {
        let mut rooms: Vec<Room> = Vec::new();

        for _ in 0..target {
            for _ in 0..ROOM_PLACEMENT_ATTEMPTS {
                let width = rng.gen_range(ROOM_MIN_SIZE..=ROOM_MAX_SIZE);
                let height = rng.gen_range(ROOM_MIN_SIZE..=ROOM_MAX_SIZE);

                let max_x = self.grid.width() - width - 2;
                let max_y = self.grid.height() - height - 2;
                if max_x < 1 || max_y < 1 {
                    continue;
                }

                let candidate = Room::new(
                    rng.gen_range(1..=max_x),
                    rng.gen_range(1..=max_y),
                    width,
                    height,
                );

                if !rooms.iter().any(|room| room.overlaps_padded(&candidate)) {
                    rooms.push(candidate);
                    break;
                }
            }
        }

        rooms
    }

    /// Phase B: border cells become walls, interior cells a random floor
    /// variant. Touching rooms overwrite each other, which the soft overlap
    /// policy accepts.
    fn fill_room(&mut self, room: &Room, rng: &mut impl Rng) {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                let on_border = x == room.x
                    || x == room.x + room.width - 1
                    || y == room.y
                    || y == room.y + room.height - 1;
                if on_border {
                    self.grid.set(x, y, Cell::of(CellType::Wall));
                } else {
                    let variant = FLOOR_VARIANTS[rng.gen_range(0..FLOOR_VARIANTS.len())];
                    self.grid.set(x, y, Cell::of(variant));
                }
            }
        }
    }

    /// Phase C: L-shaped corridor between two room centers, orientation
    /// chosen by coin flip.
    fn connect_rooms(&mut self, a: &Room, b: &Room, rng: &mut impl Rng) {
        let (x1, y1) = a.center();
        let (x2, y2) = b.center();

        if rng.gen_bool(0.5) {
            self.carve_h_corridor(x1, x2, y1);
            self.carve_v_corridor(y1, y2, x2);
        } else {
            self.carve_v_corridor(y1, y2, x1);
            self.carve_h_corridor(x1, x2, y2);
        }
    }

    /// Corridors cut through walls (including other rooms' walls on the way)
    /// but leave any non-wall content untouched.
    fn carve_cell(&mut self, x: i32, y: i32) {
        match self.grid.get(x, y) {
            Some(cell) if cell.kind != CellType::Wall => {}
            _ => self.grid.set(x, y, Cell::of(CellType::StoneFloor)),
        }
    }

    fn carve_h_corridor(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.carve_cell(x, y);
        }
    }

    fn carve_v_corridor(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.carve_cell(x, y);
        }
    }

    /// Phase D: the first room gets its door centered on the top wall,
    /// unconditionally. Every later room gets one door on a random non-corner
    /// border cell; a room with no candidates gets none.
    fn place_doors(&mut self, rooms: &[Room], rng: &mut impl Rng) {
        for (i, room) in rooms.iter().enumerate() {
            if i == 0 {
                self.grid
                    .set(room.x + room.width / 2, room.y, Cell::of(CellType::Door));
                continue;
            }

            let mut candidates: Vec<(i32, i32)> = Vec::new();
            for x in room.x + 1..room.x + room.width - 1 {
                candidates.push((x, room.y));
                candidates.push((x, room.y + room.height - 1));
            }
            for y in room.y + 1..room.y + room.height - 1 {
                candidates.push((room.x, y));
                candidates.push((room.x + room.width - 1, y));
            }

            if candidates.is_empty() {
                continue;
            }
            let (x, y) = candidates[rng.gen_range(0..candidates.len())];
            self.grid.set(x, y, Cell::of(CellType::Door));
        }
    }

    fn is_floor_at(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y).map_or(false, |cell| cell.kind.is_floor())
    }

    /// Phase E: each room rolls once against the tier's object chance, then
    /// tries to drop 1–3 objects on random interior squares. An attempt that
    /// hits anything but floor is dropped without retry.
    fn place_objects(&mut self, rooms: &[Room], chance: f64, rng: &mut impl Rng) {
        for room in rooms {
            if !rng.gen_bool(chance) {
                continue;
            }
            let count = rng.gen_range(1..=3);
            for _ in 0..count {
                let (x, y) = room.random_interior(rng);
                if self.is_floor_at(x, y) {
                    let object = OBJECT_PALETTE[rng.gen_range(0..OBJECT_PALETTE.len())];
                    self.grid.set(x, y, Cell::of(object));
                }
            }
        }
    }

    /// Phase F: per-room monsters with 20 retries each, then the tier's
    /// map-wide extras sharing a single 50-retry budget that re-picks both
    /// room and coordinate on every attempt.
    fn place_monsters(
        &mut self,
        rooms: &[Room],
        cfg: &DifficultyConfig,
        rng: &mut impl Rng,
    ) -> usize {
        let mut placed = 0;

        for room in rooms {
            let count = rng.gen_range(cfg.monsters_per_room.0..=cfg.monsters_per_room.1);
            for _ in 0..count {
                for _ in 0..MONSTER_PLACEMENT_ATTEMPTS {
                    let (x, y) = room.random_interior(rng);
                    if self.is_floor_at(x, y) {
                        self.grid.set(x, y, Cell::of(CellType::Monster));
                        placed += 1;
                        break;
                    }
                }
            }
        }

        if !rooms.is_empty() {
            let mut extras = 0;
            let mut attempts = EXTRA_MONSTER_ATTEMPTS;
            while extras < cfg.extra_monsters && attempts > 0 {
                attempts -= 1;
                let room = &rooms[rng.gen_range(0..rooms.len())];
                let (x, y) = room.random_interior(rng);
                if self.is_floor_at(x, y) {
                    self.grid.set(x, y, Cell::of(CellType::Monster));
                    extras += 1;
                    placed += 1;
                }
            }
        }

        placed
    }
}
