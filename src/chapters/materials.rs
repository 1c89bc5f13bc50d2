use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::chapters::light_cube::LightCube;
use crate::mesh::{self, LitVertex};
use crate::pipeline;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Globals {
    model: Mat4,
    view_proj: Mat4,
    view_pos: Vec4,
    mat_ambient: Vec4,
    mat_diffuse: Vec4,
    mat_specular: Vec4,
    mat_shininess: Vec4,
    light_position: Vec4,
    light_ambient: Vec4,
    light_diffuse: Vec4,
    light_specular: Vec4,
}

/// Material and light property structs, with the classic task where the
/// light color drifts over time.
pub struct Materials {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    light_cube: LightCube,
    mat_ambient: [f32; 3],
    mat_diffuse: [f32; 3],
    mat_specular: [f32; 3],
    shininess: i32,
    light_pos: Vec3,
    animate_light: bool,
    // cached for the light-cube marker color
    light_diffuse: Vec3,
}

impl Materials {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/materials.wgsl"));
        let pipeline = pipeline::render_pipeline(
            ctx.device,
            "materials",
            &shader,
            &[LitVertex::layout()],
            ctx.format,
        );

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("materials cube"),
                contents: bytemuck::cast_slice(&mesh::CUBE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let uniform_buf = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("materials globals"),
            size: size_of::<Globals>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("materials bind group"),
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
            mat_ambient: [1.0, 0.5, 0.31],
            mat_diffuse: [1.0, 0.5, 0.31],
            mat_specular: [0.5, 0.5, 0.5],
            shininess: 32,
            light_pos: Vec3::new(1.2, 1.0, 2.0),
            animate_light: true,
            light_diffuse: Vec3::splat(0.5),
        }
    }
}

impl Chapter for Materials {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label("Material");
        ui.color_edit_button_rgb(&mut self.mat_ambient);
        ui.color_edit_button_rgb(&mut self.mat_diffuse);
        ui.color_edit_button_rgb(&mut self.mat_specular);
        ui.add(egui::Slider::new(&mut self.shininess, 2..=256).text("shininess"));
        ui.separator();
        ui.checkbox(&mut self.animate_light, "Animate light color");
        ui.label("Light position");
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut self.light_pos.x).speed(0.05));
            ui.add(egui::DragValue::new(&mut self.light_pos.y).speed(0.05));
            ui.add(egui::DragValue::new(&mut self.light_pos.z).speed(0.05));
        });
    }

    fn update(&mut self, queue: &wgpu::Queue, scene: &SceneParams) {
        let light_color = if self.animate_light {
            Vec3::new(
                (scene.time * 2.0).sin() * 0.5 + 0.5,
                (scene.time * 0.7).sin() * 0.5 + 0.5,
                (scene.time * 1.3).sin() * 0.5 + 0.5,
            )
        } else {
            Vec3::ONE
        };
        self.light_diffuse = light_color * 0.5;

        let view_proj = scene.projection * scene.view;
        let globals = Globals {
            model: Mat4::IDENTITY,
            view_proj,
            view_pos: scene.camera_pos.extend(1.0),
            mat_ambient: Vec3::from(self.mat_ambient).extend(1.0),
            mat_diffuse: Vec3::from(self.mat_diffuse).extend(1.0),
            mat_specular: Vec3::from(self.mat_specular).extend(1.0),
            mat_shininess: Vec4::new(self.shininess as f32, 0.0, 0.0, 0.0),
            light_position: self.light_pos.extend(1.0),
            light_ambient: (light_color * 0.2).extend(1.0),
            light_diffuse: self.light_diffuse.extend(1.0),
            light_specular: Vec4::ONE,
        };
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&globals));
        self.light_cube
            .update(queue, view_proj, self.light_pos, light_color);
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
