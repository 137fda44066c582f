use std::sync::Arc;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

mod config;
mod error;
mod export;
mod math;
mod renderer;

use config::AppConfig;
use math::SampleSet;
use renderer::GpuState;

struct App {
    config: AppConfig,
    samples: SampleSet,
    pitches: Vec<f32>,

    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,

    /// Set when window or GPU setup fails; ends the event loop
    fatal: Option<error::Error>,
}

impl App {
    fn new(config: AppConfig, samples: SampleSet) -> Self {
        let pitches = samples.pitches();
        Self {
            config,
            samples,
            pitches,
            window: None,
            gpu: None,
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> error::Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.window.title)
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = pollster::block_on(GpuState::new(
            window.clone(),
            &self.samples.vertices,
            &self.pitches,
            self.config.clear_color,
        ))?;

        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn render(&mut self) {
        let Some(gpu) = &self.gpu else { return };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                gpu.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of GPU memory");
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        gpu.render_lines(&view, &mut encoder);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            error!("{e}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    info!(
        "{}: {}, {} points ({} vertices)",
        config.label,
        config.graph.kind(),
        config.points_count,
        config.graph.vertex_count(config.points_count)
    );

    let samples = SampleSet::compute(&config.graph, config.points_count)
        .context("failed to compute sample set")?;

    let report = export::export(&samples, &config.output_dir);
    if !report.failed.is_empty() {
        warn!(
            "Exported {} of {} {} artifacts",
            report.written.len(),
            report.written.len() + report.failed.len(),
            samples.kind()
        );
    }

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, samples);
    event_loop.run_app(&mut app)?;

    match app.fatal {
        Some(e) => Err(e).context("failed to set up window"),
        None => Ok(()),
    }
}
