use super::helpers;
use crate::constants::SHAPE_UNIFORM_STRIDE;
use crate::core::{Camera, Field, PointVertex};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    viewport: [f32; 2],
    _pad: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ShapeUniforms {
    model: [[f32; 4]; 4],
    point_size: f32,
    opacity: f32,
    _pad: [f32; 2],
}

const POINT_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub(crate) struct PointsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) globals_buffer: wgpu::Buffer,
    pub(crate) globals_bg: wgpu::BindGroup,
    pub(crate) shape_bgl: wgpu::BindGroupLayout,
}

/// GPU copies of one field's meshes plus a uniform slot per shape.
pub(crate) struct FieldBuffers {
    pub(crate) vertex_buffers: Vec<(wgpu::Buffer, u32)>,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) generation: u64,
}

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    target_format: wgpu::TextureFormat,
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
    });
    let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("points_globals_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX,
            false,
            None,
        )],
    });
    let shape_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("points_shape_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            true,
            wgpu::BufferSize::new(std::mem::size_of::<ShapeUniforms>() as u64),
        )],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[&globals_bgl, &shape_bgl],
        push_constant_ranges: &[],
    });
    let additive = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    };
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("points_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_points"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PointVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &POINT_ATTRIBUTES,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_points"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState {
                    color: additive,
                    alpha: additive,
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("points_globals"),
        size: std::mem::size_of::<Globals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("points_globals_bg"),
        layout: &globals_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: globals_buffer.as_entire_binding(),
        }],
    });
    PointsResources {
        pipeline,
        globals_buffer,
        globals_bg,
        shape_bgl,
    }
}

pub(crate) fn upload_field(
    device: &wgpu::Device,
    res: &PointsResources,
    field: &Field,
    generation: u64,
) -> FieldBuffers {
    let vertex_buffers = field
        .shapes()
        .iter()
        .map(|s| {
            let packed = s.mesh.packed();
            let buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("shape_points"),
                contents: bytemuck::cast_slice(&packed),
                usage: wgpu::BufferUsages::VERTEX,
            });
            (buf, packed.len() as u32)
        })
        .collect::<Vec<_>>();
    let slots = field.len().max(1) as u64;
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("shape_uniforms"),
        size: slots * SHAPE_UNIFORM_STRIDE,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("shape_uniforms_bg"),
        layout: &res.shape_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &uniform_buffer,
                offset: 0,
                size: wgpu::BufferSize::new(std::mem::size_of::<ShapeUniforms>() as u64),
            }),
        }],
    });
    log::info!(
        "[gpu] uploaded {} shapes ({} points)",
        vertex_buffers.len(),
        vertex_buffers.iter().map(|(_, n)| *n as u64).sum::<u64>()
    );
    FieldBuffers {
        vertex_buffers,
        uniform_buffer,
        bind_group,
        generation,
    }
}

pub(crate) fn write_frame(
    queue: &wgpu::Queue,
    res: &PointsResources,
    buffers: &FieldBuffers,
    field: &Field,
    camera: &Camera,
    viewport_px: [f32; 2],
) {
    let globals = Globals {
        view_proj: camera.view_projection().to_cols_array_2d(),
        viewport: viewport_px,
        _pad: [0.0; 2],
    };
    queue.write_buffer(&res.globals_buffer, 0, bytemuck::bytes_of(&globals));

    let group = field.group_matrix();
    for (i, s) in field.shapes().iter().enumerate() {
        let u = ShapeUniforms {
            model: (group * s.state.local_matrix()).to_cols_array_2d(),
            point_size: s.state.point_size(),
            opacity: s.state.opacity(),
            _pad: [0.0; 2],
        };
        queue.write_buffer(
            &buffers.uniform_buffer,
            i as u64 * SHAPE_UNIFORM_STRIDE,
            bytemuck::bytes_of(&u),
        );
    }
}

pub(crate) fn draw<'p>(
    rpass: &mut wgpu::RenderPass<'p>,
    res: &PointsResources,
    buffers: &FieldBuffers,
) {
    rpass.set_pipeline(&res.pipeline);
    rpass.set_bind_group(0, &res.globals_bg, &[]);
    for (i, (buf, count)) in buffers.vertex_buffers.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        let offset = (i as u64 * SHAPE_UNIFORM_STRIDE) as wgpu::DynamicOffset;
        rpass.set_bind_group(1, &buffers.bind_group, &[offset]);
        rpass.set_vertex_buffer(0, buf.slice(..));
        rpass.draw(0..6, 0..*count);
    }
}
