use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use bytemuck::{bytes_of, Pod, Zeroable};
use glam::Mat3;
use log::info;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowId};

use super::common::{CameraParams, PipelineKind};
use super::shared::SHADER;
use crate::lighting::{Light, Material};
use crate::mesh::VERTEX_STRIDE;
use crate::scene::{Prop, Scene, Surface};
use crate::state::ShadingMode;

/// GPU renderer backed by wgpu that draws the props of a scene.
pub struct Renderer {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    depth: DepthBuffer,
    pipelines: Pipelines,
    global_buffer: wgpu::Buffer,
    global_bind_group: wgpu::BindGroup,
    props: Vec<PropBuffers>,
}

impl Renderer {
    /// Initializes the GPU renderer for the provided window and uploads every
    /// prop of the scene.
    pub async fn new(window: Arc<Window>, scene: &Scene) -> Result<Self> {
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(anyhow!("window has zero area"));
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            flags: wgpu::InstanceFlags::default(),
            memory_budget_thresholds: Default::default(),
            backend_options: Default::default(),
        });
        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to acquire GPU adapter")?;
        let adapter_info = adapter.get_info();
        info!(
            "using adapter {} ({:?})",
            adapter_info.name, adapter_info.backend
        );

        let device_descriptor = wgpu::DeviceDescriptor {
            label: Some("viewer-device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            experimental_features: Default::default(),
            memory_hints: Default::default(),
            trace: Default::default(),
        };
        let (device, queue) = adapter
            .request_device(&device_descriptor)
            .await
            .context("failed to create GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Shader output is written as-is, without an sRGB encode.
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|format| !format.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let depth = DepthBuffer::create(&device, config.width, config.height);

        let global_layout = uniform_layout::<GlobalUniform>(&device, "global-bind-layout");
        let prop_layout = uniform_layout::<PropConstants>(&device, "prop-bind-layout");

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipelines = Pipelines::create(&device, surface_format, &global_layout, &prop_layout);
        if let Some(err) = device.pop_error_scope().await {
            return Err(anyhow!("shader pipeline validation failed:\n{err}"));
        }

        let global_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("global-uniform"),
            size: std::mem::size_of::<GlobalUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let global_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("global-bind-group"),
            layout: &global_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: global_buffer.as_entire_binding(),
            }],
        });

        let props = scene
            .props
            .iter()
            .map(|prop| PropBuffers::upload(&device, &prop_layout, prop))
            .collect();

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            depth,
            pipelines,
            global_buffer,
            global_bind_group,
            props,
        })
    }

    /// Returns the identifier of the window owned by the renderer.
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    /// Exposes the inner window for event handling.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Width over height of the current surface.
    pub fn aspect(&self) -> f32 {
        if self.size.height == 0 {
            1.0
        } else {
            self.size.width as f32 / self.size.height as f32
        }
    }

    /// Resizes the swap chain to match the new dimensions.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth = DepthBuffer::create(&self.device, new_size.width, new_size.height);
    }

    /// Updates the camera and lighting uniforms before rendering.
    pub fn update_globals(&self, camera: &CameraParams, lights: &[Light; 2]) {
        let uniform = GlobalUniform {
            view_proj: camera.view_proj.to_cols_array_2d(),
            camera_position: camera.position.extend(1.0).into(),
            light0_position: lights[0].position.into(),
            light0_radiance: lights[0].radiance().extend(1.0).into(),
            light1_position: lights[1].position.into(),
            light1_radiance: lights[1].radiance().extend(1.0).into(),
        };
        self.queue
            .write_buffer(&self.global_buffer, 0, bytes_of(&uniform));
    }

    /// Draws every prop, one draw call each, in scene order.
    pub fn render(&mut self, shading: ShadingMode) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("viewer-encoder"),
            });

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("main-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, &self.global_bind_group, &[]);
        for prop in &self.props {
            let kind = PipelineKind::for_surface(&prop.surface, shading);
            pass.set_pipeline(self.pipelines.get(kind));
            pass.set_bind_group(1, &prop.bind_group, &[]);
            pass.set_vertex_buffer(0, prop.vertex.slice(..));
            pass.set_index_buffer(prop.index.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..prop.index_count, 0, 0..1);
        }

        drop(pass);
        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn uniform_layout<T>(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<T>() as u64),
            },
            count: None,
        }],
    })
}

struct Pipelines {
    outline: wgpu::RenderPipeline,
    gouraud: wgpu::RenderPipeline,
    phong: wgpu::RenderPipeline,
}

impl Pipelines {
    fn create(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        global_layout: &wgpu::BindGroupLayout,
        prop_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("viewer-shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("viewer-pipeline-layout"),
            bind_group_layouts: &[global_layout, prop_layout],
            push_constant_ranges: &[],
        });

        let build = |label: &str, vs: &str, fs: &str, topology: wgpu::PrimitiveTopology| {
            let strip_index_format = match topology {
                wgpu::PrimitiveTopology::LineStrip | wgpu::PrimitiveTopology::TriangleStrip => {
                    Some(wgpu::IndexFormat::Uint32)
                }
                _ => None,
            };
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(vs),
                    compilation_options: Default::default(),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: (VERTEX_STRIDE * std::mem::size_of::<f32>()) as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x3,
                                offset: 0,
                                shader_location: 0,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x3,
                                offset: (3 * std::mem::size_of::<f32>()) as u64,
                                shader_location: 1,
                            },
                        ],
                    }],
                },
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DepthBuffer::FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: Default::default(),
                    bias: Default::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(fs),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                multiview: None,
                cache: None,
            })
        };

        Self {
            outline: build(
                "outline-pipeline",
                "vs_outline",
                "fs_flat",
                wgpu::PrimitiveTopology::LineStrip,
            ),
            gouraud: build(
                "gouraud-pipeline",
                "vs_gouraud",
                "fs_flat",
                wgpu::PrimitiveTopology::TriangleList,
            ),
            phong: build(
                "phong-pipeline",
                "vs_phong",
                "fs_phong",
                wgpu::PrimitiveTopology::TriangleList,
            ),
        }
    }

    fn get(&self, kind: PipelineKind) -> &wgpu::RenderPipeline {
        match kind {
            PipelineKind::Outline => &self.outline,
            PipelineKind::Gouraud => &self.gouraud,
            PipelineKind::Phong => &self.phong,
        }
    }
}

struct PropBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
    surface: Surface,
    _uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl PropBuffers {
    fn upload(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, prop: &Prop) -> Self {
        let label = &prop.name;
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-vertices")),
            contents: bytemuck::cast_slice(&prop.vertex_data()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = prop.draw_indices();
        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-indices")),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let constants = PropConstants::new(prop);
        let uniform = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-uniform")),
            contents: bytes_of(&constants),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label}-bind-group")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
        });

        Self {
            vertex,
            index,
            index_count: indices.len() as u32,
            surface: prop.surface,
            _uniform: uniform,
            bind_group,
        }
    }
}

struct DepthBuffer {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthBuffer {
    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

    fn create(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth-texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            _texture: texture,
            view,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct GlobalUniform {
    view_proj: [[f32; 4]; 4],
    camera_position: [f32; 4],
    light0_position: [f32; 4],
    light0_radiance: [f32; 4],
    light1_position: [f32; 4],
    light1_radiance: [f32; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
struct PropConstants {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 3],
    color: [f32; 4],
    ambient: [f32; 4],
    diffuse: [f32; 4],
    specular: [f32; 4],
}

impl PropConstants {
    fn new(prop: &Prop) -> Self {
        // Outlines never reach the lighting code, so any material will do.
        let material = match prop.surface {
            Surface::Lit(material) => material,
            Surface::Unlit => Material::COPPER,
        };
        let normal = Mat3::from_mat4(prop.model).inverse().transpose();
        Self {
            model: prop.model.to_cols_array_2d(),
            normal: mat3_to_3x4(normal),
            color: prop.color.extend(1.0).into(),
            ambient: material.ambient.extend(1.0).into(),
            diffuse: material.diffuse.extend(1.0).into(),
            specular: material.specular.extend(material.shininess).into(),
        }
    }
}

fn mat3_to_3x4(matrix: Mat3) -> [[f32; 4]; 3] {
    let cols = matrix.to_cols_array();
    [
        [cols[0], cols[1], cols[2], 0.0],
        [cols[3], cols[4], cols[5], 0.0],
        [cols[6], cols[7], cols[8], 0.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::NormalPolicy;

    #[test]
    fn uniform_sizes_match_shader_layout() {
        assert_eq!(std::mem::size_of::<GlobalUniform>(), 144);
        assert_eq!(std::mem::size_of::<PropConstants>(), 176);
    }

    #[test]
    fn shader_validates_and_matches_uniform_layouts() {
        use wgpu::naga;

        let module = naga::front::wgsl::parse_str(SHADER).expect("shader parses");
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        )
        .validate(&module)
        .expect("shader validates");

        let entry_points: Vec<_> = module
            .entry_points
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        for name in ["vs_outline", "vs_gouraud", "fs_flat", "vs_phong", "fs_phong"] {
            assert!(entry_points.contains(&name), "missing entry point {name}");
        }

        let mut layouter = naga::proc::Layouter::default();
        layouter.update(module.to_ctx()).expect("layout resolves");
        let size_of_type = |name: &str| {
            module
                .types
                .iter()
                .find(|(_, ty)| ty.name.as_deref() == Some(name))
                .map(|(handle, _)| layouter[handle].size as usize)
                .unwrap_or_else(|| panic!("shader declares no {name}"))
        };
        assert_eq!(
            size_of_type("GlobalUniform"),
            std::mem::size_of::<GlobalUniform>()
        );
        assert_eq!(
            size_of_type("PropConstants"),
            std::mem::size_of::<PropConstants>()
        );
    }

    #[test]
    fn prop_constants_pack_material_and_shininess() {
        let scene = Scene::campus(NormalPolicy::default()).unwrap();
        let bay_hall = scene.prop("Bay Hall").unwrap();
        let constants = PropConstants::new(bay_hall);
        assert_eq!(constants.specular[3], Material::GOLD.shininess);
        assert_eq!(constants.diffuse[..3], Material::GOLD.diffuse.to_array());
        assert_eq!(constants.color, [0.1, 0.1, 0.5, 1.0]);
        assert_eq!(constants.normal[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
