use marionette_core::math::screen_projection;

/// A debug draw vertex: position in screen points + color.
///
/// Used for line-list rendering. Every pair of consecutive vertices
/// forms one line segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DebugVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Uniform buffer data for the debug line shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DebugUniforms {
    /// Column-major 4x4 view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl DebugUniforms {
    /// Pixel-space projection for a window of the given size in points
    /// (origin top-left, y down).
    pub fn for_screen(width: f32, height: f32) -> Self {
        Self {
            view_proj: screen_projection(width, height).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_is_tight() {
        assert_eq!(std::mem::size_of::<DebugVertex>(), 24);
        assert_eq!(std::mem::size_of::<DebugUniforms>(), 64);
    }

    #[test]
    fn screen_uniforms_are_finite() {
        let uniforms = DebugUniforms::for_screen(1280.0, 720.0);
        for column in &uniforms.view_proj {
            for value in column {
                assert!(value.is_finite());
            }
        }
    }
}
