use super::helpers;
use super::targets::{SimTargets, FIELD_FORMAT};
use crate::trail::TrailUniforms;
use wgpu;

pub(crate) struct SimResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    /// `bind_groups[i]` samples target `i` as the previous field.
    pub(crate) bind_groups: [wgpu::BindGroup; 2],
}

pub(crate) fn create_sim_resources(
    device: &wgpu::Device,
    targets: &SimTargets,
    sampler: &wgpu::Sampler,
) -> SimResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("trail_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::TRAIL_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("trail_bgl"),
        entries: &[
            helpers::texture_entry(0),
            helpers::sampler_entry(1),
            helpers::uniform_entry(2),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("trail_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline =
        helpers::make_fullscreen_pipeline(device, "trail_pipeline", &pl, &shader, "fs_trail", FIELD_FORMAT);
    let uniform_buffer = helpers::create_uniform_buffer::<TrailUniforms>(device, "trail_uniforms");

    let make_bg = |label: &str, view: &wgpu::TextureView| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        })
    };
    let bind_groups = [
        make_bg("trail_bg_from_ping", &targets.views[0]),
        make_bg("trail_bg_from_pong", &targets.views[1]),
    ];

    SimResources {
        pipeline,
        uniform_buffer,
        bind_groups,
    }
}
