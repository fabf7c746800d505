use glam::Vec3;

/// Triangle-list buffers backing a procedural shape.
///
/// Vertices, normals, and indices are parallel sequences; a resolution
/// change replaces all three wholesale, never piecewise, so a renderer
/// reading between frames always sees a consistent set.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Shape name, carried through to draw calls for inspection.
    pub name: &'static str,
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn with_capacity(name: &'static str, vertices: usize) -> Self {
        Self {
            name,
            vertices: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(vertices),
        }
    }

    /// Append a flat-shaded triangle: three fresh vertices, the face
    /// normal duplicated into each vertex slot, indices running on
    /// sequentially. No vertex is shared across faces.
    pub fn push_flat_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, normal: Vec3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[a, b, c]);
        self.normals.extend_from_slice(&[normal, normal, normal]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn test_flat_triangle_layout() {
        let mut mesh = MeshData::with_capacity("tri", 3);
        let n = vec3(0.0, 1.0, 0.0);
        mesh.push_flat_triangle(Vec3::ZERO, Vec3::X, Vec3::Z, n);
        mesh.push_flat_triangle(Vec3::X, Vec3::Z, Vec3::Y, n);

        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.normals.len(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.triangle_count(), 2);
    }
}
