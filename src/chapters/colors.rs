use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::chapters::light_cube::LightCube;
use crate::mesh::{self, LitVertex};
use crate::pipeline;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Params {
    mvp: Mat4,
    object_color: Vec4,
    light_color: Vec4,
}

/// First lighting scene: the object's color is just
/// `object_color * light_color`, no shading yet.
pub struct Colors {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    light_cube: LightCube,
    object_color: [f32; 3],
    light_color: [f32; 3],
    light_pos: Vec3,
}

impl Colors {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/colors.wgsl"));
        let pipeline = pipeline::render_pipeline(
            ctx.device,
            "colors",
            &shader,
            &[LitVertex::layout()],
            ctx.format,
        );

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("colors cube"),
                contents: bytemuck::cast_slice(&mesh::CUBE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let uniform_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("colors params"),
                contents: bytemuck::bytes_of(&Params {
                    mvp: Mat4::IDENTITY,
                    object_color: Vec4::ONE,
                    light_color: Vec4::ONE,
                }),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("colors bind group"),
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
            light_cube: LightCube::new(ctx),
            object_color: [1.0, 0.5, 0.31],
            light_color: [1.0, 1.0, 1.0],
            light_pos: Vec3::new(1.2, 1.0, 2.0),
        }
    }
}

impl Chapter for Colors {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label("Object color");
        ui.color_edit_button_rgb(&mut self.object_color);
        ui.label("Light color");
        ui.color_edit_button_rgb(&mut self.light_color);
        ui.label("Light position");
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut self.light_pos.x).speed(0.05));
            ui.add(egui::DragValue::new(&mut self.light_pos.y).speed(0.05));
            ui.add(egui::DragValue::new(&mut self.light_pos.z).speed(0.05));
        });
    }

    fn update(&mut self, queue: &wgpu::Queue, scene: &SceneParams) {
        let view_proj = scene.projection * scene.view;
        let params = Params {
            mvp: view_proj,
            object_color: Vec3::from(self.object_color).extend(1.0),
            light_color: Vec3::from(self.light_color).extend(1.0),
        };
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&params));
        self.light_cube.update(
            queue,
            view_proj,
            self.light_pos,
            Vec3::from(self.light_color),
        );
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
