/// Camera uniform buffer data for GPU
///
/// Matrices are column-major, ready for `projection * view * model` in a shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}
