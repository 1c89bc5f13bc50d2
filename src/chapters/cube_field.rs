use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::chapter::RenderContext;
use crate::mesh::{self, LitVertex};
use crate::{pipeline, texture};

const TEXTURE_SIZE: u32 = 64;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Globals {
    view_proj: Mat4,
}

/// The ten scattered textured cubes, instanced over a storage buffer of
/// model matrices. Shared by the coordinate-systems and camera chapters.
pub struct CubeField {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    globals_buf: wgpu::Buffer,
    models_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl CubeField {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/scene.wgsl"));
        let pipeline = pipeline::render_pipeline(
            ctx.device,
            "cube field",
            &shader,
            &[LitVertex::layout()],
            ctx.format,
        );

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cube field vertices"),
                contents: bytemuck::cast_slice(&mesh::CUBE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let globals_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cube field globals"),
                contents: bytemuck::bytes_of(&Globals {
                    view_proj: Mat4::IDENTITY,
                }),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let models = [Mat4::IDENTITY; 10];
        let models_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cube field models"),
                contents: bytemuck::cast_slice(&models),
                usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
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
            label: Some("cube field bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: models_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&container),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&rings),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            pipeline,
            vertex_buf,
            globals_buf,
            models_buf,
            bind_group,
        }
    }

    /// The classic per-cube model matrices: scattered positions, each tilted
    /// by an angle that grows with its index; every third cube also spins.
    pub fn classic_models(time: f32, spin_every_third: bool) -> [Mat4; 10] {
        std::array::from_fn(|i| {
            let mut angle = 20.0_f32 * i as f32;
            if spin_every_third && i % 3 == 0 {
                angle += time * 50.0;
            }
            Mat4::from_translation(mesh::CUBE_POSITIONS[i])
                * Mat4::from_axis_angle(
                    glam::Vec3::new(1.0, 0.3, 0.5).normalize(),
                    angle.to_radians(),
                )
        })
    }

    pub fn update(&self, queue: &wgpu::Queue, view_proj: Mat4, models: &[Mat4; 10]) {
        queue.write_buffer(
            &self.globals_buf,
            0,
            bytemuck::bytes_of(&Globals { view_proj }),
        );
        queue.write_buffer(&self.models_buf, 0, bytemuck::cast_slice(models));
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, Some(&self.bind_group), &[]);
        pass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        pass.draw(0..36, 0..10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_models_translate_to_the_fixed_positions() {
        let models = CubeField::classic_models(0.0, false);
        for (model, pos) in models.iter().zip(mesh::CUBE_POSITIONS) {
            let translation = model.transform_point3(glam::Vec3::ZERO);
            assert!((translation - pos).length() < 1e-5);
        }
    }

    #[test]
    fn spin_only_affects_every_third_cube() {
        let still = CubeField::classic_models(3.0, false);
        let spinning = CubeField::classic_models(3.0, true);
        for i in 0..10 {
            let same = still[i].to_cols_array() == spinning[i].to_cols_array();
            assert_eq!(same, i % 3 != 0, "cube {i}");
        }
    }
}
