//! Closed solid assembly.
//!
//! The solid is the resampled top surface, one wall polygon per grid
//! boundary and a flat base at z = 0. All faces are wound counter-clockwise
//! when viewed from outside the solid, and every edge is shared by exactly
//! two faces traversing it in opposite directions.

use crate::progress::{ProgressObserver, Stage};
use crate::ElevationGrid;

/// A vertex position `[x, y, z]`.
pub type Vertex = [f64; 3];

/// A polygon as 1-based vertex indices.
pub type Face = Vec<usize>;

/// 1-based OBJ index of grid vertex `(row, col)` in a grid `cols` wide.
pub fn vertex_index(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col + 1
}

/// 1-based indices of the four base corners.
///
/// They follow the grid vertices in the fixed order SW, NE, NW, SE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseCorners {
    /// South-west corner.
    pub sw: usize,
    /// North-east corner.
    pub ne: usize,
    /// North-west corner.
    pub nw: usize,
    /// South-east corner.
    pub se: usize,
}

impl BaseCorners {
    /// Base corner indices for a grid of `rows * cols` vertices.
    pub fn for_grid(rows: usize, cols: usize) -> Self {
        let n = rows * cols;
        Self {
            sw: n + 1,
            ne: n + 2,
            nw: n + 3,
            se: n + 4,
        }
    }
}

/// Vertices and faces of the finished solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    rows: usize,
    cols: usize,
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
}

impl Mesh {
    /// All vertices; OBJ index `i` is `vertices()[i - 1]`.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All faces: top triangles, then south, east, north and west walls,
    /// then the base.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Grid rows of the top surface.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid columns of the top surface.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of top-surface triangles.
    pub fn top_face_count(&self) -> usize {
        2 * (self.rows - 1) * (self.cols - 1)
    }

    /// Indices of the base corners.
    pub fn base_corners(&self) -> BaseCorners {
        BaseCorners::for_grid(self.rows, self.cols)
    }
}

/// Build the solid from normalized elevations.
///
/// `xs` and `ys` are the physical coordinates of the grid columns (west to
/// east) and rows (south to north). The base spans their endpoints.
///
/// # Panics
///
/// Panics if the grid has fewer than two rows or columns, or if the axis
/// lengths do not match the grid.
pub fn assemble<P>(grid: &ElevationGrid, xs: &[f64], ys: &[f64], progress: &mut P) -> Mesh
where
    P: ProgressObserver + ?Sized,
{
    let (rows, cols) = (grid.rows(), grid.cols());
    assert!(rows >= 2 && cols >= 2, "grid must be at least 2x2, got {rows}x{cols}");
    assert_eq!(xs.len(), cols, "x axis length must match grid columns");
    assert_eq!(ys.len(), rows, "y axis length must match grid rows");

    let mut vertices = Vec::with_capacity(rows * cols + 4);
    for (r, &y) in ys.iter().enumerate() {
        for (c, &x) in xs.iter().enumerate() {
            vertices.push([x, y, grid.get(r, c)]);
        }
    }

    let (x0, x1) = (xs[0], xs[cols - 1]);
    let (y0, y1) = (ys[0], ys[rows - 1]);
    // Must match BaseCorners::for_grid
    vertices.push([x0, y0, 0.0]);
    vertices.push([x1, y1, 0.0]);
    vertices.push([x0, y1, 0.0]);
    vertices.push([x1, y0, 0.0]);

    let mut faces = Vec::with_capacity(2 * (rows - 1) * (cols - 1) + 5);
    let idx = |r: usize, c: usize| vertex_index(r, c, cols);

    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let sw = idx(r, c);
            let se = idx(r, c + 1);
            let nw = idx(r + 1, c);
            let ne = idx(r + 1, c + 1);
            faces.push(vec![sw, se, nw]);
            faces.push(vec![se, ne, nw]);
        }
        progress.on_progress(Stage::Assemble, r + 1, rows - 1);
    }

    let base = BaseCorners::for_grid(rows, cols);
    let (last_row, last_col) = (rows - 1, cols - 1);

    // South wall, seen from the south: base west to east, then top east to west
    let mut south = vec![base.sw, base.se];
    south.extend((0..cols).rev().map(|c| idx(0, c)));
    faces.push(south);

    // East wall, seen from the east: base south to north, then top north to south
    let mut east = vec![base.se, base.ne];
    east.extend((0..rows).rev().map(|r| idx(r, last_col)));
    faces.push(east);

    // North wall, seen from the north: base east to west, then top west to east
    let mut north = vec![base.ne, base.nw];
    north.extend((0..cols).map(|c| idx(last_row, c)));
    faces.push(north);

    // West wall, seen from the west: base north to south, then top south to north
    let mut west = vec![base.nw, base.sw];
    west.extend((0..rows).map(|r| idx(r, 0)));
    faces.push(west);

    // Base, clockwise from above so its normal points down
    faces.push(vec![base.sw, base.nw, base.ne, base.se]);

    Mesh {
        rows,
        cols,
        vertices,
        faces,
    }
}
