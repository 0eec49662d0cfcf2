use crate::assets::{BackgroundSlot, LoadedImage};
use crate::constants::{BOTTOM_PLACEHOLDER_RGBA, SIM_SIZE, TOP_PLACEHOLDER_RGBA};
use crate::cover::DisplayUniforms;
use crate::trail::TrailUniforms;
use glam::Vec2;
use web_sys as web;

mod background;
mod display;
mod formats;
mod helpers;
mod sim;
mod targets;

use background::BackgroundTexture;
use display::DisplayResources;
use sim::SimResources;
use targets::SimTargets;

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    linear_sampler: wgpu::Sampler,

    // Trail simulation (ping-pong) and the composite that reads it
    targets: SimTargets,
    sim: SimResources,
    display: DisplayResources,
    display_bind_groups: [wgpu::BindGroup; 2],

    // Hot-swappable background handles
    top: BackgroundTexture,
    bottom: BackgroundTexture,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = formats::pick_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        let linear_sampler = helpers::create_linear_sampler(&device);

        let targets = SimTargets::new(&device, SIM_SIZE);
        let sim = sim::create_sim_resources(&device, &targets, &linear_sampler);
        let display = display::create_display_resources(&device, format);

        let top = BackgroundTexture::placeholder(&device, &queue, "top_placeholder", TOP_PLACEHOLDER_RGBA);
        let bottom = BackgroundTexture::placeholder(
            &device,
            &queue,
            "bottom_placeholder",
            BOTTOM_PLACEHOLDER_RGBA,
        );
        let display_bind_groups =
            display::build_bind_groups(&device, &display, &targets, &top, &bottom, &linear_sampler);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("trail_init"),
        });
        targets.clear(&mut encoder);
        queue.submit(Some(encoder.finish()));
        log::info!(
            "[gpu] trail targets {}x{} ({:?})",
            targets.size(),
            targets.size(),
            targets::FIELD_FORMAT
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            linear_sampler,
            targets,
            sim,
            display,
            display_bind_groups,
            top,
            bottom,
            width,
            height,
        })
    }

    /// Natural size of the image currently bound to `slot`.
    pub fn background_size(&self, slot: BackgroundSlot) -> Vec2 {
        match slot {
            BackgroundSlot::Top => self.top.size,
            BackgroundSlot::Bottom => self.bottom.size,
        }
    }

    /// Replace the texture bound to `slot` with a freshly loaded image.
    pub fn install_background(&mut self, slot: BackgroundSlot, image: &LoadedImage) {
        let label = match slot {
            BackgroundSlot::Top => "top_background",
            BackgroundSlot::Bottom => "bottom_background",
        };
        let fresh = BackgroundTexture::from_image(&self.device, &self.queue, label, image);
        let old = match slot {
            BackgroundSlot::Top => std::mem::replace(&mut self.top, fresh),
            BackgroundSlot::Bottom => std::mem::replace(&mut self.bottom, fresh),
        };
        self.display_bind_groups = display::build_bind_groups(
            &self.device,
            &self.display,
            &self.targets,
            &self.top,
            &self.bottom,
            &self.linear_sampler,
        );
        old.texture.destroy();
        log::info!(
            "[gpu] {:?} background now {} ({}x{})",
            slot,
            image.url,
            image.width,
            image.height
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Run one frame: the simulation pass reads trail target `read` and writes
    /// `write`, then the display pass masks with `write` onto the surface.
    pub fn render(
        &mut self,
        read: usize,
        write: usize,
        trail: &TrailUniforms,
        display: &DisplayUniforms,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue
            .write_buffer(&self.sim.uniform_buffer, 0, bytemuck::bytes_of(trail));
        self.queue
            .write_buffer(&self.display.uniform_buffer, 0, bytemuck::bytes_of(display));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: advance the trail field into the write target
        helpers::blit(
            &mut encoder,
            "trail_pass",
            &self.targets.views[write],
            wgpu::Color::TRANSPARENT,
            &self.sim.pipeline,
            &self.sim.bind_groups[read],
        );

        // Pass 2: composite both backgrounds through the fresh field
        helpers::blit(
            &mut encoder,
            "display_pass",
            &view,
            wgpu::Color::BLACK,
            &self.display.pipeline,
            &self.display_bind_groups[write],
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
