use glam::{IVec3, Mat4};

pub(crate) const SHADING_LAMBERT: f32 = 0.0;
pub(crate) const SHADING_NORMAL: f32 = 1.0;

/// Per-instance vertex data: model matrix columns, color and shading params.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceData {
    pub(crate) model_0: [f32; 4],
    pub(crate) model_1: [f32; 4],
    pub(crate) model_2: [f32; 4],
    pub(crate) model_3: [f32; 4],
    pub(crate) color: [f32; 4],
    pub(crate) params: [f32; 4],
}

impl InstanceData {
    pub(crate) fn new(model: Mat4, color: [f32; 3], shading: f32) -> Self {
        Self {
            model_0: model.x_axis.to_array(),
            model_1: model.y_axis.to_array(),
            model_2: model.z_axis.to_array(),
            model_3: model.w_axis.to_array(),
            color: [color[0], color[1], color[2], 1.0],
            params: [shading, 0.0, 0.0, 0.0],
        }
    }

    /// Lambert-shaded cube centred on a lattice point.
    pub(crate) fn marker(position: IVec3, color: [f32; 3]) -> Self {
        Self::new(
            Mat4::from_translation(position.as_vec3()),
            color,
            SHADING_LAMBERT,
        )
    }

    /// Normal-shaded mesh with an arbitrary model matrix.
    pub(crate) fn normal_shaded(model: Mat4) -> Self {
        Self::new(model, [1.0, 1.0, 1.0], SHADING_NORMAL)
    }
}

/// Smallest power-of-two multiple of `current` (at least 1) that holds `needed`.
pub(crate) fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut cap = current.max(1);
    while cap < needed {
        cap *= 2;
    }
    cap
}
