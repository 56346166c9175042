use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::f64::consts::{PI, TAU};
use std::hash::{Hash, Hasher};

use crate::field::try_filled_vec;
use crate::{BitmapMask, BrushfireVariant, DistanceField, SdfConfig, SdfFieldError};

const NEIGHBOR_STEPS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One wavefront entry: a cell plus the vector offset from that cell's
/// center to the nearest point of the seeding boundary edge.
///
/// The offset is the quantity the wavefront actually propagates; the scalar
/// priority is always rederived from it, so distances stay exact instead of
/// accumulating per-step increments.
#[derive(Clone, Copy, Debug)]
struct WavefrontNode {
    x: usize,
    y: usize,
    dx: f64,
    dy: f64,
}

impl WavefrontNode {
    fn priority(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

// Queue identity is the cell alone; two nodes for the same cell compare
// equal even when they carry different offsets.
impl PartialEq for WavefrontNode {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for WavefrontNode {}

impl Hash for WavefrontNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

/// Heap entry ordered by priority, reversed so the smallest distance
/// surfaces first on `BinaryHeap`.
struct QueueEntry {
    priority: f64,
    node: WavefrontNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
    }
}

/// A binary heap with lazy decrease-key semantics.
///
/// `best` (shared across all queues) records the lowest priority pushed so
/// far for every cell. A push that does not improve on it is dropped, and
/// entries superseded by a later improvement or an earlier closure are
/// skipped when they surface.
struct WavefrontQueue {
    heap: BinaryHeap<QueueEntry>,
}

impl WavefrontQueue {
    fn new() -> WavefrontQueue {
        WavefrontQueue {
            heap: BinaryHeap::new(),
        }
    }

    fn push_improving(&mut self, node: WavefrontNode, best: &mut [f64], width: usize) {
        let priority = node.priority();
        let idx = node.y * width + node.x;
        if priority < best[idx] {
            best[idx] = priority;
            self.heap.push(QueueEntry { priority, node });
        }
    }

    /// Discards stale entries, then reports the head priority.
    fn peek_priority(&mut self, closed: &[bool], best: &[f64], width: usize) -> Option<f64> {
        while let Some(entry) = self.heap.peek() {
            let idx = entry.node.y * width + entry.node.x;
            if closed[idx] || entry.priority > best[idx] {
                self.heap.pop();
            } else {
                return Some(entry.priority);
            }
        }
        None
    }

    fn pop(&mut self, closed: &[bool], best: &[f64], width: usize) -> Option<WavefrontNode> {
        while let Some(entry) = self.heap.pop() {
            let idx = entry.node.y * width + entry.node.x;
            if closed[idx] || entry.priority > best[idx] {
                continue;
            }
            return Some(entry.node);
        }
        None
    }
}

/// Assigns cells to equal angular sectors around the image center.
///
/// Angles are taken in center-normalized coordinates, so a non-square image
/// still splits into sectors covering equal image fractions.
struct SectorMap {
    center_x: f64,
    center_y: f64,
    count: usize,
}

impl SectorMap {
    fn new(width: usize, height: usize, count: usize) -> SectorMap {
        SectorMap {
            center_x: width as f64 / 2.0,
            center_y: height as f64 / 2.0,
            count,
        }
    }

    fn sector_of(&self, x: usize, y: usize) -> usize {
        if self.count == 1 {
            return 0;
        }
        let angle = (y as f64 / self.center_y - 1.0).atan2(x as f64 / self.center_x - 1.0);
        let turn = (angle + PI) / TAU;
        ((turn * self.count as f64) as usize).min(self.count - 1)
    }
}

fn neighbors(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOR_STEPS.iter().filter_map(move |&(dx, dy)| {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        (nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height)
            .then(|| (nx as usize, ny as usize))
    })
}

/// Computes the unsigned field by best-first propagation from the boundary.
///
/// Cells of the source color (interior unless `invert`) keep the implicit
/// distance zero; every other cell ends up with the exact Euclidean edge
/// distance to the nearest source cell. Seeds are the opposite-colored
/// neighbors of source cells, entered with a half-cell offset toward the
/// shared edge or corner; propagation then relaxes the eight neighbors of
/// every extracted cell, rebasing the carried offset by the step taken.
pub(crate) fn compute_udf(
    mask: &BitmapMask,
    invert: bool,
    config: &SdfConfig,
) -> Result<DistanceField, SdfFieldError> {
    let source = !invert;
    let width = mask.width();
    let height = mask.height();
    let mut field = DistanceField::zeroed(width, height)?;
    let mut closed = try_filled_vec(false, width * height)?;
    let mut best = try_filled_vec(f64::INFINITY, width * height)?;

    let queue_count = match config.brushfire_variant {
        BrushfireVariant::SingleQueue => 1,
        BrushfireVariant::MultiQueuePolar => config.thread_count.max(1),
    };
    let sectors = SectorMap::new(width, height, queue_count);
    let mut queues: Vec<WavefrontQueue> = (0..queue_count).map(|_| WavefrontQueue::new()).collect();

    for y in 0..height {
        for x in 0..width {
            if mask.get(x, y) != source {
                continue;
            }
            for (nx, ny) in neighbors(x, y, width, height) {
                if mask.get(nx, ny) == source {
                    continue;
                }
                let node = WavefrontNode {
                    x: nx,
                    y: ny,
                    dx: (x as f64 - nx as f64) / 2.0,
                    dy: (y as f64 - ny as f64) / 2.0,
                };
                queues[sectors.sector_of(nx, ny)].push_improving(node, &mut best, width);
            }
        }
    }

    let mut extracted = 0usize;
    loop {
        // Serialized global-minimum selection across queue heads; ties go
        // to the lowest sector index.
        let mut head: Option<(f64, usize)> = None;
        for (i, queue) in queues.iter_mut().enumerate() {
            if let Some(priority) = queue.peek_priority(&closed, &best, width) {
                if head.map_or(true, |(h, _)| priority < h) {
                    head = Some((priority, i));
                }
            }
        }
        let Some((_, winner)) = head else { break };
        let Some(node) = queues[winner].pop(&closed, &best, width) else {
            continue;
        };

        let idx = node.y * width + node.x;
        closed[idx] = true;
        field.as_mut_slice()[idx] = node.priority();

        for (nx, ny) in neighbors(node.x, node.y, width, height) {
            if closed[ny * width + nx] || mask.get(nx, ny) == source {
                continue;
            }
            let relaxed = WavefrontNode {
                x: nx,
                y: ny,
                dx: node.dx - (nx as f64 - node.x as f64),
                dy: node.dy - (ny as f64 - node.y as f64),
            };
            queues[sectors.sector_of(nx, ny)].push_improving(relaxed, &mut best, width);
        }

        extracted += 1;
        if extracted % width == 0 {
            config.check_cancelled()?;
        }
    }

    Ok(field)
}
