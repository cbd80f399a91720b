use super::helpers;
use crate::core::{BLOOM_STRENGTH, BLOOM_THRESHOLD, CHROMATIC_OFFSET};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    threshold: f32,
    bloom_strength: f32,
    chroma_offset: f32,
    enabled: f32,
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    // One buffer per blur direction: queue writes land before the encoder runs,
    // so passes cannot share a buffer that changes between them.
    pub(crate) uniform_h: wgpu::Buffer,
    pub(crate) uniform_v: wgpu::Buffer,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

pub(crate) struct PostBindGroups {
    pub(crate) hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup, // group1 for composite
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    bloom_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
    });
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            helpers::texture_layout_entry(0),
            helpers::sampler_layout_entry(1),
            helpers::uniform_layout_entry(2, wgpu::ShaderStages::FRAGMENT, false, None),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[
            helpers::texture_layout_entry(0),
            helpers::sampler_layout_entry(1),
        ],
    });
    let make_uniform = |label: &str| {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };
    let uniform_h = make_uniform("post_uniforms_h");
    let uniform_v = make_uniform("post_uniforms_v");
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let pl_bright_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = helpers::make_post_pipeline(
        device,
        &pl_bright_blur,
        &shader,
        "fs_bright",
        bloom_format,
        None,
    );
    let blur_pipeline =
        helpers::make_post_pipeline(device, &pl_bright_blur, &shader, "fs_blur", bloom_format, None);
    let composite_pipeline = helpers::make_post_pipeline(
        device,
        &pl_composite,
        &shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        uniform_h,
        uniform_v,
        sampler,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

pub(crate) fn build_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    hdr_view: &wgpu::TextureView,
    bloom_a_view: &wgpu::TextureView,
    bloom_b_view: &wgpu::TextureView,
) -> PostBindGroups {
    let with_uniform = |label: &str, view: &wgpu::TextureView, uniform: &wgpu::Buffer| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &post.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&post.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniform.as_entire_binding(),
                },
            ],
        })
    };
    let bloom_a_only = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("bg_bloom_a_only"),
        layout: &post.bgl1,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(bloom_a_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&post.sampler),
            },
        ],
    });
    PostBindGroups {
        hdr: with_uniform("bg_hdr", hdr_view, &post.uniform_h),
        from_bloom_a: with_uniform("bg_from_bloom_a", bloom_a_view, &post.uniform_h),
        from_bloom_b: with_uniform("bg_from_bloom_b", bloom_b_view, &post.uniform_v),
        bloom_a_only,
    }
}

pub(crate) fn write_post_uniforms(
    queue: &wgpu::Queue,
    post: &PostResources,
    bloom_res: [u32; 2],
    enabled: bool,
) {
    let base = PostUniforms {
        resolution: [bloom_res[0] as f32, bloom_res[1] as f32],
        blur_dir: [1.0, 0.0],
        threshold: BLOOM_THRESHOLD,
        bloom_strength: BLOOM_STRENGTH,
        chroma_offset: CHROMATIC_OFFSET,
        enabled: if enabled { 1.0 } else { 0.0 },
    };
    queue.write_buffer(&post.uniform_h, 0, bytemuck::bytes_of(&base));
    let vertical = PostUniforms {
        blur_dir: [0.0, 1.0],
        ..base
    };
    queue.write_buffer(&post.uniform_v, 0, bytemuck::bytes_of(&vertical));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
