use crate::constants::{
    AMBIENT_INTENSITY, CLEAR_COLOR_SRGB, ICOSA_RADIUS, LIGHT_INTENSITY, LIGHT_POSITION,
    MARKER_SIZE, MSAA_SAMPLE_COUNT,
};
use crate::core::{MarkerSink, Position3, Rgb};
use glam::Mat4;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod instances;
mod markers;
mod mesh;

use instances::InstanceData;
use markers::MarkerLayer;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
}

struct MeshBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    fn upload(device: &wgpu::Device, label: &str, mesh: (Vec<mesh::Vertex>, Vec<u16>)) -> Self {
        let (vertices, indices) = mesh;
        let vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_vb")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_ib")),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices: vb,
            indices: ib,
            index_count: indices.len() as u32,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    // 4x multisampled color + depth, resolved into the surface texture
    msaa_view: wgpu::TextureView,
    depth_view: wgpu::TextureView,

    // Spinning centre piece: one mesh, one instance
    icosa: MeshBuffers,
    icosa_instance: wgpu::Buffer,
    // Walker markers: cube mesh instanced per step
    cube: MeshBuffers,
    markers: MarkerLayer,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    view: Mat4,
    view_proj: Mat4,
    centerpiece: Mat4,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        marker_capacity: usize,
    ) -> anyhow::Result<Self> {
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
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline =
            helpers::make_scene_pipeline(&device, &pl, &shader, format, MSAA_SAMPLE_COUNT);
        let msaa_view = helpers::create_msaa_color_texture(
            &device,
            "msaa_color",
            width,
            height,
            format,
            MSAA_SAMPLE_COUNT,
        );
        let depth_view =
            helpers::create_depth_texture(&device, "depth_tex", width, height, MSAA_SAMPLE_COUNT);

        let icosa = MeshBuffers::upload(&device, "icosa", mesh::icosahedron_mesh(ICOSA_RADIUS));
        let icosa_instance = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("icosa_instance"),
            size: std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let cube = MeshBuffers::upload(&device, "cube", mesh::cube_mesh(MARKER_SIZE));
        let markers = MarkerLayer::new(&device, marker_capacity);

        let clear = if format.is_srgb() {
            CLEAR_COLOR_SRGB.map(mesh::srgb_to_linear)
        } else {
            CLEAR_COLOR_SRGB
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            msaa_view,
            depth_view,
            icosa,
            icosa_instance,
            cube,
            markers,
            width,
            height,
            clear_color: wgpu::Color {
                r: clear[0] as f64,
                g: clear[1] as f64,
                b: clear[2] as f64,
                a: 1.0,
            },
            view: Mat4::IDENTITY,
            view_proj: Mat4::IDENTITY,
            centerpiece: Mat4::IDENTITY,
        })
    }

    pub fn set_camera(&mut self, view: Mat4, view_proj: Mat4) {
        self.view = view;
        self.view_proj = view_proj;
    }

    pub fn set_centerpiece(&mut self, model: Mat4) {
        self.centerpiece = model;
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
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
            self.msaa_view = helpers::create_msaa_color_texture(
                &self.device,
                "msaa_color",
                width,
                height,
                self.config.format,
                MSAA_SAMPLE_COUNT,
            );
            self.depth_view = helpers::create_depth_texture(
                &self.device,
                "depth_tex",
                width,
                height,
                MSAA_SAMPLE_COUNT,
            );
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let light_dir = LIGHT_POSITION.normalize();
        let uniforms = SceneUniforms {
            view_proj: self.view_proj.to_cols_array_2d(),
            view: self.view.to_cols_array_2d(),
            light_dir: [light_dir.x, light_dir.y, light_dir.z, LIGHT_INTENSITY],
            light_color: [1.0, 1.0, 1.0, AMBIENT_INTENSITY],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.queue.write_buffer(
            &self.icosa_instance,
            0,
            bytemuck::bytes_of(&InstanceData::normal_shaded(self.centerpiece)),
        );
        self.markers.flush(&self.device, &self.queue);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);

            rpass.set_vertex_buffer(0, self.icosa.vertices.slice(..));
            rpass.set_vertex_buffer(1, self.icosa_instance.slice(..));
            rpass.set_index_buffer(self.icosa.indices.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.icosa.index_count, 0, 0..1);

            let marker_count = self.markers.len() as u32;
            if marker_count > 0 {
                rpass.set_vertex_buffer(0, self.cube.vertices.slice(..));
                rpass.set_vertex_buffer(1, self.markers.buffer().slice(..));
                rpass.set_index_buffer(self.cube.indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..self.cube.index_count, 0, 0..marker_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> MarkerSink for GpuState<'a> {
    fn place_marker(&mut self, position: Position3, color: Rgb) {
        self.markers.push(InstanceData::marker(position, color));
    }
}
