use crate::renderer::vertex::Vertex;
use glam::Vec3;
use wgpu::util::DeviceExt;

pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_indices: u32,
}

impl Mesh {
    /// Unit sphere uploaded once; instances scale and place it.
    pub fn new_sphere(device: &wgpu::Device, latitudes: u32, longitudes: u32) -> Self {
        let (vertices, indices) = generate_uv_sphere(latitudes, longitudes);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            num_indices: indices.len() as u32,
        }
    }
}

/// Latitude/longitude sphere of radius 1. Normals equal positions.
fn generate_uv_sphere(latitudes: u32, longitudes: u32) -> (Vec<Vertex>, Vec<u32>) {
    let latitudes = latitudes.max(2);
    let longitudes = longitudes.max(3);
    let mut vertices = Vec::with_capacity(((latitudes + 1) * (longitudes + 1)) as usize);
    let mut indices = Vec::with_capacity((latitudes * longitudes * 6) as usize);

    for lat in 0..=latitudes {
        let theta = lat as f32 * std::f32::consts::PI / latitudes as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for lon in 0..=longitudes {
            let phi = lon as f32 * 2.0 * std::f32::consts::PI / longitudes as f32;
            let point = Vec3::new(phi.cos() * sin_theta, cos_theta, phi.sin() * sin_theta);
            vertices.push(Vertex {
                position: point,
                normal: point,
            });
        }
    }

    // Counter-clockwise when seen from outside
    for lat in 0..latitudes {
        for lon in 0..longitudes {
            let first = lat * (longitudes + 1) + lon;
            let second = first + longitudes + 1;

            indices.extend_from_slice(&[first, first + 1, second, second, first + 1, second + 1]);
        }
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertices_lie_on_unit_sphere() {
        let (vertices, indices) = generate_uv_sphere(8, 16);
        assert_eq!(vertices.len(), 9 * 17);
        assert_eq!(indices.len(), 8 * 16 * 6);
        assert!(vertices.iter().all(|v| (v.position.length() - 1.0).abs() < 1e-5));
        assert!(indices.iter().all(|i| (*i as usize) < vertices.len()));
    }

    #[test]
    fn triangles_face_outward() {
        let (vertices, indices) = generate_uv_sphere(8, 16);
        for tri in indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| vertices[i as usize].position);
            let normal = (b - a).cross(c - a);
            if normal.length() < 1e-6 {
                continue; // collapsed triangle at a pole
            }
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }
}
