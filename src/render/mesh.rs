/// Vertex of a lit mesh: object-space position and normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

/// Axis-aligned cube with edge length `size`, one normal per face.
pub(crate) fn cube_mesh(size: f32) -> (Vec<Vertex>, Vec<u16>) {
    let p = size * 0.5;
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([0.0, 0.0, 1.0], [[-p, -p, p], [p, -p, p], [p, p, p], [-p, p, p]]),
        ([0.0, 0.0, -1.0], [[p, -p, -p], [-p, -p, -p], [-p, p, -p], [p, p, -p]]),
        ([1.0, 0.0, 0.0], [[p, -p, p], [p, -p, -p], [p, p, -p], [p, p, p]]),
        ([-1.0, 0.0, 0.0], [[-p, -p, -p], [-p, -p, p], [-p, p, p], [-p, p, -p]]),
        ([0.0, 1.0, 0.0], [[-p, p, p], [p, p, p], [p, p, -p], [-p, p, -p]]),
        ([0.0, -1.0, 0.0], [[-p, -p, -p], [p, -p, -p], [p, -p, p], [-p, -p, p]]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in faces.iter() {
        let base = vertices.len() as u16;
        for c in corners.iter() {
            vertices.push(Vertex {
                position: *c,
                normal: *normal,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    (vertices, indices)
}

/// Flat-shaded icosahedron of circumradius `radius`: 20 faces, 3 vertices each.
pub(crate) fn icosahedron_mesh(radius: f32) -> (Vec<Vertex>, Vec<u16>) {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    #[rustfmt::skip]
    let corners: [[f32; 3]; 12] = [
        [-1.0,  t, 0.0], [ 1.0,  t, 0.0], [-1.0, -t, 0.0], [ 1.0, -t, 0.0],
        [0.0, -1.0,  t], [0.0,  1.0,  t], [0.0, -1.0, -t], [0.0,  1.0, -t],
        [ t, 0.0, -1.0], [ t, 0.0,  1.0], [-t, 0.0, -1.0], [-t, 0.0,  1.0],
    ];
    #[rustfmt::skip]
    let faces: [[usize; 3]; 20] = [
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];
    let scaled: Vec<glam::Vec3> = corners
        .iter()
        .map(|c| glam::Vec3::from_array(*c).normalize() * radius)
        .collect();

    let mut vertices = Vec::with_capacity(60);
    let mut indices = Vec::with_capacity(60);
    for face in faces.iter() {
        let [a, b, c] = face.map(|i| scaled[i]);
        let normal = (b - a).cross(c - a).normalize();
        for p in [a, b, c] {
            indices.push(vertices.len() as u16);
            vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
    }
    (vertices, indices)
}

/// Convert one sRGB-encoded channel to linear.
#[inline]
pub(crate) fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
