use super::background::BackgroundTexture;
use super::helpers;
use super::targets::SimTargets;
use crate::cover::DisplayUniforms;
use wgpu;

pub(crate) struct DisplayResources {
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
}

pub(crate) fn create_display_resources(
    device: &wgpu::Device,
    swap_format: wgpu::TextureFormat,
) -> DisplayResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("display_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::DISPLAY_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("display_bgl"),
        entries: &[
            helpers::texture_entry(0), // trail field
            helpers::texture_entry(1), // top
            helpers::texture_entry(2), // bottom
            helpers::sampler_entry(3),
            helpers::uniform_entry(4),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("display_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_fullscreen_pipeline(
        device,
        "display_pipeline",
        &pl,
        &shader,
        "fs_display",
        swap_format,
    );
    let uniform_buffer =
        helpers::create_uniform_buffer::<DisplayUniforms>(device, "display_uniforms");

    DisplayResources {
        bgl,
        pipeline,
        uniform_buffer,
    }
}

/// One bind group per trail target; `[i]` masks with target `i`. Rebuilt
/// whenever a background texture is swapped.
pub(crate) fn build_bind_groups(
    device: &wgpu::Device,
    display: &DisplayResources,
    targets: &SimTargets,
    top: &BackgroundTexture,
    bottom: &BackgroundTexture,
    sampler: &wgpu::Sampler,
) -> [wgpu::BindGroup; 2] {
    let make_bg = |label: &str, fluid: &wgpu::TextureView| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &display.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(fluid),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&top.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&bottom.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: display.uniform_buffer.as_entire_binding(),
                },
            ],
        })
    };
    [
        make_bg("display_bg_ping", &targets.views[0]),
        make_bg("display_bg_pong", &targets.views[1]),
    ]
}
