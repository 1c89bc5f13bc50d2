use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::chapters::light_cube::LightCube;
use crate::mesh::{self, LitVertex};
use crate::{pipeline, texture};

const TEXTURE_SIZE: u32 = 64;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Globals {
    model: Mat4,
    view_proj: Mat4,
    view_pos: Vec4,
    light_position: Vec4,
    light_ambient: Vec4,
    light_diffuse: Vec4,
    light_specular: Vec4,
    misc: Vec4,
}

/// Diffuse and specular maps: the crate pattern colors the diffuse term,
/// the bright border drives the highlight.
pub struct LightingMaps {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    light_cube: LightCube,
    light_pos: Vec3,
    shininess: i32,
}

impl LightingMaps {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/lighting_maps.wgsl"));
        let pipeline = pipeline::render_pipeline(
            ctx.device,
            "lighting maps",
            &shader,
            &[LitVertex::layout()],
            ctx.format,
        );

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("lighting maps cube"),
                contents: bytemuck::cast_slice(&mesh::CUBE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let uniform_buf = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lighting maps globals"),
            size: size_of::<Globals>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let diffuse = texture::upload_rgba(
            ctx.device,
            ctx.queue,
            "diffuse map",
            TEXTURE_SIZE,
            &texture::container_pixels(TEXTURE_SIZE),
        );
        let specular = texture::upload_rgba(
            ctx.device,
            ctx.queue,
            "specular map",
            TEXTURE_SIZE,
            &texture::container_specular_pixels(TEXTURE_SIZE),
        );
        let sampler = texture::linear_sampler(ctx.device);

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lighting maps bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&diffuse),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&specular),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            pipeline,
            vertex_buf,
            uniform_buf,
            bind_group,
            light_cube: LightCube::new(ctx),
            light_pos: Vec3::new(1.2, 1.0, 2.0),
            shininess: 8,
        }
    }
}

impl Chapter for LightingMaps {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.add(egui::Slider::new(&mut self.shininess, 2..=256).text("shininess"));
        ui.label("Light position");
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut self.light_pos.x).speed(0.05));
            ui.add(egui::DragValue::new(&mut self.light_pos.y).speed(0.05));
            ui.add(egui::DragValue::new(&mut self.light_pos.z).speed(0.05));
        });
    }

    fn update(&mut self, queue: &wgpu::Queue, scene: &SceneParams) {
        let view_proj = scene.projection * scene.view;
        let globals = Globals {
            model: Mat4::IDENTITY,
            view_proj,
            view_pos: scene.camera_pos.extend(1.0),
            light_position: self.light_pos.extend(1.0),
            light_ambient: Vec4::new(0.2, 0.2, 0.2, 1.0),
            light_diffuse: Vec4::new(0.5, 0.5, 0.5, 1.0),
            light_specular: Vec4::ONE,
            misc: Vec4::new(self.shininess as f32, 0.0, 0.0, 0.0),
        };
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&globals));
        self.light_cube
            .update(queue, view_proj, self.light_pos, Vec3::ONE);
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, Some(&self.bind_group), &[]);
        pass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        pass.draw(0..36, 0..1);

        self.light_cube.draw(pass);
    }

    fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: 0.1,
            g: 0.1,
            b: 0.1,
            a: 1.0,
        }
    }
}
