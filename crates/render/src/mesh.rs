/// Tetrahedron corner positions: a triangular base at y = -1 and an apex at y = 1.
pub const TETRAHEDRON_VERTICES: [[f32; 3]; 4] = [
    [-1.0, -1.0, 0.5773],
    [0.0, -1.0, -1.15475],
    [1.0, -1.0, 0.5773],
    [0.0, 1.0, 0.0],
];

/// Four triangles, three sides then the base.
#[rustfmt::skip]
pub const TETRAHEDRON_INDICES: [u32; 12] = [
    0, 3, 1,
    1, 3, 2,
    2, 3, 0,
    0, 2, 1,
];
