use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use log::debug;

use crate::math::PitchSign;

/// Per-segment uniform, padded to 16 bytes
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct PitchUniform {
    pub sign: f32,
    pub _pad: [f32; 3],
}

pub const PITCH_UNIFORM_SIZE: u64 = std::mem::size_of::<PitchUniform>() as u64;

/// Distance between uniform slots, rounded up to the device's dynamic offset
/// alignment
pub fn uniform_stride(alignment: u32) -> u64 {
    let alignment = u64::from(alignment.max(1));
    PITCH_UNIFORM_SIZE.div_ceil(alignment) * alignment
}

/// Number of two-vertex segments in a strip of `vertex_count` vertices
pub fn segment_count(vertex_count: u32) -> u32 {
    vertex_count.saturating_sub(1)
}

/// Dynamic offset of the uniform slot for `segment`
pub fn pitch_offset(segment: u32, stride: u64) -> u32 {
    (u64::from(segment) * stride) as u32
}

/// Uniform buffer contents, one slot per segment
pub fn pack_pitch_uniforms(pitches: &[f32], stride: u64) -> Vec<u8> {
    let stride = stride as usize;
    let mut bytes = vec![0u8; pitches.len() * stride];

    for (slot, &pitch) in bytes.chunks_exact_mut(stride).zip(pitches) {
        let uniform = PitchUniform {
            sign: PitchSign::of(pitch).uniform_value(),
            _pad: [0.0; 3],
        };
        slot[..PITCH_UNIFORM_SIZE as usize].copy_from_slice(bytemuck::bytes_of(&uniform));
    }

    bytes
}

/// Vertex buffer and per-segment sign uniforms, uploaded once
pub struct LineStripBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub pitch_buffer: wgpu::Buffer,
    pub uniform_stride: u64,
    vertex_count: u32,
}

impl LineStripBuffers {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        vertices: &[Vec3],
        pitches: &[f32],
    ) -> Self {
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Strip Vertex Buffer"),
            size: std::mem::size_of_val(vertices) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(vertices));

        let uniform_stride = uniform_stride(device.limits().min_uniform_buffer_offset_alignment);
        let uniforms = pack_pitch_uniforms(pitches, uniform_stride);
        debug!(
            "Pitch uniform stride {} bytes, {} slots",
            uniform_stride,
            pitches.len()
        );

        let pitch_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Pitch Uniform Buffer"),
            size: (uniforms.len() as u64).max(uniform_stride),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&pitch_buffer, 0, &uniforms);

        Self {
            vertex_buffer,
            pitch_buffer,
            uniform_stride,
            vertex_count: vertices.len() as u32,
        }
    }

    pub fn segment_count(&self) -> u32 {
        segment_count(self.vertex_count)
    }

    pub fn pitch_offset(&self, segment: u32) -> u32 {
        pitch_offset(segment, self.uniform_stride)
    }

    pub fn pitch_binding(&self) -> wgpu::BindingResource<'_> {
        wgpu::BindingResource::Buffer(wgpu::BufferBinding {
            buffer: &self.pitch_buffer,
            offset: 0,
            size: wgpu::BufferSize::new(PITCH_UNIFORM_SIZE),
        })
    }
}

pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vec3>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_respects_alignment() {
        assert_eq!(uniform_stride(256), 256);
        assert_eq!(uniform_stride(16), 16);
        assert_eq!(uniform_stride(4), 16);
        assert_eq!(uniform_stride(0), 16);
        assert_eq!(uniform_stride(64), 64);
    }

    #[test]
    fn segments_stop_before_last_vertex() {
        assert_eq!(segment_count(0), 0);
        assert_eq!(segment_count(1), 0);
        assert_eq!(segment_count(2), 1);
        assert_eq!(segment_count(50), 49);
        assert_eq!(segment_count(50 * 50), 2499);
    }

    #[test]
    fn offsets_step_by_stride() {
        let stride = uniform_stride(256);
        for segment in [0, 1, 2, 48, 2498] {
            assert_eq!(pitch_offset(segment, stride), segment * 256);
        }
        assert_eq!(pitch_offset(3, uniform_stride(4)), 48);

        // The last slot still fits in the packed buffer
        let pitches = vec![1.0; 49];
        let bytes = pack_pitch_uniforms(&pitches, stride);
        let last = pitch_offset(segment_count(50) - 1, stride) as u64;
        assert!(last + PITCH_UNIFORM_SIZE <= bytes.len() as u64);
    }

    #[test]
    fn packs_one_sign_per_slot() {
        let bytes = pack_pitch_uniforms(&[3.0, -0.5, 0.0, f32::NAN], 256);
        assert_eq!(bytes.len(), 4 * 256);

        let sign = |slot: usize| -> f32 {
            let uniform: PitchUniform =
                bytemuck::pod_read_unaligned(&bytes[slot * 256..slot * 256 + 16]);
            uniform.sign
        };
        assert_eq!(sign(0), 1.0);
        assert_eq!(sign(1), -1.0);
        assert_eq!(sign(2), 0.0);
        assert_eq!(sign(3), 0.0);
    }

    #[test]
    fn vertices_are_tightly_packed() {
        assert_eq!(vertex_layout().array_stride, 12);
        let v = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let floats: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
