use crate::constants::HDR_FORMAT;
use crate::core::{Background, Scene};
use web_sys as web;

mod helpers;
mod points;
mod post;
mod targets;
use points::{FieldBuffers, PointsResources};
use post::{PostBindGroups, PostResources};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    points: PointsResources,
    field_buffers: Option<FieldBuffers>,
    post: PostResources,
    post_bind_groups: PostBindGroups,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, background: Background) -> anyhow::Result<Self> {
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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if background.is_transparent()
            && caps
                .alpha_modes
                .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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

        let targets = RenderTargets::new(&device, width, height);
        let points = points::create_points_resources(&device, HDR_FORMAT);
        let post = post::create_post_resources(&device, HDR_FORMAT, format);
        let post_bind_groups = post::build_bind_groups(
            &device,
            &post,
            &targets.hdr_view,
            &targets.bloom_a_view,
            &targets.bloom_b_view,
        );
        log::info!("[gpu] surface {}x{} {:?} alpha={:?}", width, height, format, alpha_mode);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            points,
            field_buffers: None,
            post,
            post_bind_groups,
            width,
            height,
            clear_color: clear_color_for(background),
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and the bind groups that sample them
            self.targets.recreate(&self.device, width, height);
            self.post_bind_groups = post::build_bind_groups(
                &self.device,
                &self.post,
                &self.targets.hdr_view,
                &self.targets.bloom_a_view,
                &self.targets.bloom_b_view,
            );
        }
    }

    /// Upload meshes when the scene was rebuilt since the last upload.
    fn sync_field(&mut self, scene: &Scene) {
        let stale = self
            .field_buffers
            .as_ref()
            .map_or(true, |b| b.generation != scene.generation());
        if stale {
            self.clear_color = clear_color_for(scene.background());
            self.field_buffers = Some(points::upload_field(
                &self.device,
                &self.points,
                &scene.field,
                scene.generation(),
            ));
        }
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        self.sync_field(scene);
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: point sprites → HDR
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
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
            if let Some(buffers) = &self.field_buffers {
                points::write_frame(
                    &self.queue,
                    &self.points,
                    buffers,
                    &scene.field,
                    &scene.camera,
                    [self.width as f32, self.height as f32],
                );
                points::draw(&mut rpass, &self.points, buffers);
            }
        }

        let post_enabled = scene.config().enable_post_processing;
        post::write_post_uniforms(
            &self.queue,
            &self.post,
            self.targets.bloom_size,
            post_enabled,
        );
        if post_enabled {
            // Pass 2: bright pass → bloom_a
            post::blit(
                &mut encoder,
                "bright_pass",
                &self.targets.bloom_a_view,
                wgpu::Color::BLACK,
                &self.post.bright_pipeline,
                &self.post_bind_groups.hdr,
                None,
            );
            // Pass 3: blur horizontal bloom_a -> bloom_b
            post::blit(
                &mut encoder,
                "blur_h",
                &self.targets.bloom_b_view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_bind_groups.from_bloom_a,
                None,
            );
            // Pass 4: blur vertical bloom_b -> bloom_a
            post::blit(
                &mut encoder,
                "blur_v",
                &self.targets.bloom_a_view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_bind_groups.from_bloom_b,
                None,
            );
        }

        // Pass 5: composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_bind_groups.hdr,
            Some(&self.post_bind_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn clear_color_for(background: Background) -> wgpu::Color {
    let [r, g, b, a] = background.linear();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
