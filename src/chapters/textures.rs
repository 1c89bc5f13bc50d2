use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use wgpu::util::DeviceExt;

use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::mesh::{self, TexVertex};
use crate::{pipeline, texture};

const TEXTURE_SIZE: u32 = 64;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Params {
    // x: mix ratio, y: second texture enabled
    mix_ratio: Vec4,
}

/// A rectangle sampling one or two generated textures, with a mix slider.
pub struct Textures {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    mix_ratio: f32,
    second_enabled: bool,
}

impl Textures {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/texture.wgsl"));
        let pipeline = pipeline::render_pipeline(
            ctx.device,
            "textures",
            &shader,
            &[TexVertex::layout()],
            ctx.format,
        );

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("textured rectangle"),
                contents: bytemuck::cast_slice(&mesh::TEX_RECTANGLE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("textured rectangle indices"),
                contents: bytemuck::cast_slice(&mesh::RECTANGLE_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });
        let uniform_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("textures params"),
                contents: bytemuck::bytes_of(&Params {
                    mix_ratio: Vec4::new(0.2, 1.0, 0.0, 0.0),
                }),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let container = texture::upload_rgba(
            ctx.device,
            ctx.queue,
            "container",
            TEXTURE_SIZE,
            &texture::container_pixels(TEXTURE_SIZE),
        );
        let rings = texture::upload_rgba(
            ctx.device,
            ctx.queue,
            "rings",
            TEXTURE_SIZE,
            &texture::rings_pixels(TEXTURE_SIZE),
        );
        let sampler = texture::linear_sampler(ctx.device);

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("textures bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&container),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&rings),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: uniform_buf.as_entire_binding(),
                },
            ],
        });

        Self {
            pipeline,
            vertex_buf,
            index_buf,
            uniform_buf,
            bind_group,
            mix_ratio: 0.2,
            second_enabled: true,
        }
    }
}

impl Chapter for Textures {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.checkbox(&mut self.second_enabled, "Second texture");
        ui.add_enabled(
            self.second_enabled,
            egui::Slider::new(&mut self.mix_ratio, 0.0..=1.0).text("mix"),
        );
    }

    fn update(&mut self, queue: &wgpu::Queue, _scene: &SceneParams) {
        let params = Params {
            mix_ratio: Vec4::new(
                self.mix_ratio,
                if self.second_enabled { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ),
        };
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&params));
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, Some(&self.bind_group), &[]);
        pass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        pass.set_index_buffer(self.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..6, 0, 0..1);
    }
}
