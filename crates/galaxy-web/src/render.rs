use crate::constants::CLEAR_COLOR;
use crate::texture::BadgeImage;
use galaxy_core::{Camera, LineVertex, Scene, SpriteInstance, LINES_WGSL, SPRITES_WGSL};
use std::mem::size_of;
use web_sys as web;

mod helpers;

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    // x: time, y: badge texture ready
    misc: [f32; 4],
}

const QUAD_CORNERS: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0,
];

const SPRITE_ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    1 => Float32x3,
    2 => Float32,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
];

const LINE_ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x4,
];

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    sprite_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    badge_layout: wgpu::BindGroupLayout,
    badge_sampler: wgpu::Sampler,
    badge_bg: wgpu::BindGroup,
    badge_ready: bool,

    quad_vb: wgpu::Buffer,
    // starfield is static and uploaded once
    star_vb: wgpu::Buffer,
    star_count: u32,
    sprite_vb: wgpu::Buffer,
    sprite_capacity: usize,
    network_vb: wgpu::Buffer,
    network_capacity: usize,
    decor_vb: wgpu::Buffer,
    decor_capacity: usize,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
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
        let format = *caps
            .formats
            .first()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sprite_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprites_shader"),
            source: wgpu::ShaderSource::Wgsl(SPRITES_WGSL.into()),
        });
        let line_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lines_shader"),
            source: wgpu::ShaderSource::Wgsl(LINES_WGSL.into()),
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let badge_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("badge_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let badge_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("badge_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        // 1x1 placeholder until the real image arrives
        let (placeholder, placeholder_view) =
            helpers::create_rgba_texture(&device, "badge_placeholder", 1, 1);
        helpers::write_rgba(&queue, &placeholder, 1, 1, &[5, 5, 8, 255]);
        let badge_bg = make_badge_bind_group(&device, &badge_layout, &placeholder_view, &badge_sampler);

        let sprite_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprites_pl"),
            bind_group_layouts: &[&globals_layout, &badge_layout],
            push_constant_ranges: &[],
        });
        let line_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lines_pl"),
            bind_group_layouts: &[&globals_layout],
            push_constant_ranges: &[],
        });

        let sprite_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-instance sprite
            wgpu::VertexBufferLayout {
                array_stride: size_of::<SpriteInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &SPRITE_ATTRIBUTES,
            },
        ];
        let line_buffers = [wgpu::VertexBufferLayout {
            array_stride: size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &LINE_ATTRIBUTES,
        }];

        let sprite_pipeline = helpers::make_pipeline(
            &device,
            "sprites_pipeline",
            &sprite_layout,
            &sprite_shader,
            &sprite_buffers,
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );
        let line_pipeline = helpers::make_pipeline(
            &device,
            "lines_pipeline",
            &line_layout,
            &line_shader,
            &line_buffers,
            wgpu::PrimitiveTopology::LineList,
            format,
        );

        let quad_vb =
            helpers::create_init_vertex_buffer(&device, "quad_vb", bytemuck::cast_slice(&QUAD_CORNERS));
        let stars = scene.stars().as_slice();
        let star_vb = if stars.is_empty() {
            helpers::create_vertex_buffer(&device, "star_vb", 1, size_of::<SpriteInstance>())
        } else {
            helpers::create_init_vertex_buffer(&device, "star_vb", bytemuck::cast_slice(stars))
        };

        // Capacities are fixed by the scene; only live ranges are written per frame.
        let sprite_capacity = scene.sprites().capacity();
        let network_capacity = scene.network_lines().capacity_segments() * 2;
        let decor_capacity = scene.decor_lines().capacity_segments() * 2;
        let sprite_vb = helpers::create_vertex_buffer(
            &device,
            "sprite_vb",
            sprite_capacity,
            size_of::<SpriteInstance>(),
        );
        let network_vb =
            helpers::create_vertex_buffer(&device, "network_vb", network_capacity, size_of::<LineVertex>());
        let decor_vb =
            helpers::create_vertex_buffer(&device, "decor_vb", decor_capacity, size_of::<LineVertex>());

        log::info!(
            "[gpu] {:?} {}x{}; sprites={} network_vertices={} decor_vertices={} stars={}",
            format,
            width,
            height,
            sprite_capacity,
            network_capacity,
            decor_capacity,
            stars.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sprite_pipeline,
            line_pipeline,
            globals_buffer,
            globals_bg,
            badge_layout,
            badge_sampler,
            badge_bg,
            badge_ready: false,
            quad_vb,
            star_vb,
            star_count: stars.len() as u32,
            sprite_vb,
            sprite_capacity,
            network_vb,
            network_capacity,
            decor_vb,
            decor_capacity,
            width,
            height,
        })
    }

    /// Replace the placeholder badge with a decoded image.
    pub fn set_badge(&mut self, image: &BadgeImage) {
        let max_dim = self.device.limits().max_texture_dimension_2d;
        if image.width > max_dim || image.height > max_dim {
            log::warn!(
                "[texture] badge {}x{} exceeds device limit {}; keeping placeholder",
                image.width,
                image.height,
                max_dim
            );
            return;
        }
        let (tex, view) =
            helpers::create_rgba_texture(&self.device, "badge_tex", image.width, image.height);
        helpers::write_rgba(&self.queue, &tex, image.width, image.height, &image.rgba);
        self.badge_bg = make_badge_bind_group(&self.device, &self.badge_layout, &view, &self.badge_sampler);
        self.badge_ready = true;
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
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
        }
    }

    /// Reconfigure after the surface reports lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let cam_to_world = camera.view_matrix().inverse();
        let globals = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            cam_right: cam_to_world.x_axis.truncate().extend(0.0).to_array(),
            cam_up: cam_to_world.y_axis.truncate().extend(0.0).to_array(),
            misc: [
                scene.elapsed(),
                if self.badge_ready { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let sprites = clamp_live(scene.sprites().as_slice(), self.sprite_capacity);
        let network = clamp_live(scene.network_lines().as_slice(), self.network_capacity);
        let decor = clamp_live(scene.decor_lines().as_slice(), self.decor_capacity);
        if !sprites.is_empty() {
            self.queue
                .write_buffer(&self.sprite_vb, 0, bytemuck::cast_slice(sprites));
        }
        if !network.is_empty() {
            self.queue
                .write_buffer(&self.network_vb, 0, bytemuck::cast_slice(network));
        }
        if !decor.is_empty() {
            self.queue
                .write_buffer(&self.decor_vb, 0, bytemuck::cast_slice(decor));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // back to front: stars, orbit paths and headings, network edges, sprites
            rpass.set_pipeline(&self.sprite_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_bind_group(1, &self.badge_bg, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            if self.star_count > 0 {
                rpass.set_vertex_buffer(1, self.star_vb.slice(..));
                rpass.draw(0..6, 0..self.star_count);
            }

            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            if !decor.is_empty() {
                rpass.set_vertex_buffer(0, self.decor_vb.slice(..));
                rpass.draw(0..decor.len() as u32, 0..1);
            }
            if !network.is_empty() {
                rpass.set_vertex_buffer(0, self.network_vb.slice(..));
                rpass.draw(0..network.len() as u32, 0..1);
            }

            if !sprites.is_empty() {
                rpass.set_pipeline(&self.sprite_pipeline);
                rpass.set_bind_group(0, &self.globals_bg, &[]);
                rpass.set_bind_group(1, &self.badge_bg, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.sprite_vb.slice(..));
                rpass.draw(0..6, 0..sprites.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn make_badge_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("badge_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

#[inline]
fn clamp_live<T>(live: &[T], capacity: usize) -> &[T] {
    &live[..live.len().min(capacity)]
}
