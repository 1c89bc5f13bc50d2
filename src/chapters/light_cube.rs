use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::chapter::RenderContext;
use crate::mesh::LitVertex;
use crate::pipeline;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Params {
    mvp: Mat4,
    color: Vec4,
}

/// The small solid-color cube every lighting chapter draws at the light's
/// position.
pub struct LightCube {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl LightCube {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/light_cube.wgsl"));
        let pipeline = pipeline::render_pipeline(
            ctx.device,
            "light cube",
            &shader,
            &[LitVertex::layout()],
            ctx.format,
        );

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("light cube vertices"),
                contents: bytemuck::cast_slice(&crate::mesh::CUBE),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let uniform_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("light cube uniforms"),
                contents: bytemuck::bytes_of(&Params {
                    mvp: Mat4::IDENTITY,
                    color: Vec4::ONE,
                }),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("light cube bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            vertex_buf,
            uniform_buf,
            bind_group,
        }
    }

    /// Position the marker cube and set its color for this frame.
    pub fn update(
        &self,
        queue: &wgpu::Queue,
        view_proj: Mat4,
        light_pos: Vec3,
        color: Vec3,
    ) {
        let model = Mat4::from_translation(light_pos) * Mat4::from_scale(Vec3::splat(0.2));
        let params = Params {
            mvp: view_proj * model,
            color: color.extend(1.0),
        };
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&params));
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, Some(&self.bind_group), &[]);
        pass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        pass.draw(0..36, 0..1);
    }
}
