use std::sync::Arc;

use glam::Vec3;
use log::{error, info};
use winit::window::Window;

use crate::error::{Error, Result};
use crate::renderer::ShaderStage;
use crate::renderer::line_strip::{LineStripBuffers, PITCH_UNIFORM_SIZE, vertex_layout};

const VERTEX_SHADER: &str = include_str!("shaders/vertex.wgsl");
const FRAGMENT_SHADER: &str = include_str!("shaders/fragment.wgsl");

/// Pipeline and bind group, present only if both shader stages compiled and
/// linked
pub struct LinePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub pitch_bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,

    pub lines: LineStripBuffers,
    pub line_pipeline: Option<LinePipeline>,

    pub clear_color: wgpu::Color,
}

async fn compile_stage(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage.label()),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    match device.pop_error_scope().await {
        None => Ok(module),
        Some(e) => Err(Error::ShaderCompile {
            stage,
            message: e.to_string(),
        }),
    }
}

/// Converts an sRGB-encoded channel to linear light
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Clear color that shows as `rgb` on screen. An sRGB surface encodes what
/// it is given, so the color is decoded to linear first.
fn clear_color(rgb: [f64; 3], format: wgpu::TextureFormat) -> wgpu::Color {
    let [r, g, b] = if format.is_srgb() {
        rgb.map(srgb_to_linear)
    } else {
        rgb
    };
    wgpu::Color { r, g, b, a: 1.0 }
}

impl GpuState {
    pub async fn new(
        window: Arc<Window>,
        vertices: &[Vec3],
        pitches: &[f32],
        clear_color_rgb: [f64; 3],
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(Error::NoAdapter)?;
        info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let lines = LineStripBuffers::new(&device, &queue, vertices, pitches);

        let line_pipeline = match Self::create_line_pipeline(&device, &config, &lines).await {
            Ok(p) => {
                info!("Line pipeline ready, {} segments", lines.segment_count());
                Some(p)
            }
            Err(e) => {
                error!("{e}");
                None
            }
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            lines,
            line_pipeline,
            clear_color: clear_color(clear_color_rgb, surface_format),
        })
    }

    async fn create_line_pipeline(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        lines: &LineStripBuffers,
    ) -> Result<LinePipeline> {
        let vertex_shader = compile_stage(device, ShaderStage::Vertex, VERTEX_SHADER).await?;
        let fragment_shader = compile_stage(device, ShaderStage::Fragment, FRAGMENT_SHADER).await?;

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pitch_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Pitch Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(PITCH_UNIFORM_SIZE),
                    },
                    count: None,
                }],
            });

        let pitch_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Pitch Bind Group"),
            layout: &pitch_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: lines.pitch_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[&pitch_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        match device.pop_error_scope().await {
            None => Ok(LinePipeline {
                pipeline,
                pitch_bind_group,
            }),
            Some(e) => Err(Error::PipelineLink(e.to_string())),
        }
    }

    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Clears the frame, then draws each two-vertex segment with its own
    /// sign uniform bound
    pub fn render_lines(&self, view: &wgpu::TextureView, encoder: &mut wgpu::CommandEncoder) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Line Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        let Some(line_pipeline) = &self.line_pipeline else {
            return;
        };

        render_pass.set_pipeline(&line_pipeline.pipeline);
        render_pass.set_vertex_buffer(0, self.lines.vertex_buffer.slice(..));

        for segment in 0..self.lines.segment_count() {
            render_pass.set_bind_group(
                0,
                &line_pipeline.pitch_bind_group,
                &[self.lines.pitch_offset(segment)],
            );
            render_pass.draw(segment..segment + 2, 0..1);
        }
    }
}
