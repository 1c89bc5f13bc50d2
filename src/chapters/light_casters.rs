use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::chapters::cube_field::CubeField;
use crate::chapters::light_cube::LightCube;
use crate::mesh::{self, LitVertex};
use crate::{pipeline, texture};

const TEXTURE_SIZE: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Directional,
    Point,
    Spot,
}

impl Kind {
    fn as_index(self) -> f32 {
        match self {
            Kind::Directional => 0.0,
            Kind::Point => 1.0,
            Kind::Spot => 2.0,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Light {
    position: Vec4,
    direction: Vec4,
    ambient: Vec4,
    diffuse: Vec4,
    specular: Vec4,
    cone: Vec4,
    misc: Vec4,
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Globals {
    view_proj: Mat4,
    view_pos: Vec4,
    light: Light,
}

/// Directional, point, and spot lights over the ten-cube scene, selected
/// by a kind switch in one shader.
pub struct LightCasters {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    #[expect(dead_code)]
    models_buf: wgpu::Buffer,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    light_cube: LightCube,
    kind: Kind,
    light_pos: Vec3,
    light_dir: Vec3,
    cut_off_deg: f32,
    outer_cut_off_deg: f32,
    shininess: i32,
    spotlight_from_camera: bool,
}

impl LightCasters {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/light_casters.wgsl"));
        let pipeline = pipeline::render_pipeline(
            ctx.device,
            "light casters",
            &shader,
            &[LitVertex::layout()],
            ctx.format,
        );

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("casters cube"),
                contents: bytemuck::cast_slice(&mesh::CUBE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let models = CubeField::classic_models(0.0, false);
        let models_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("casters models"),
                contents: bytemuck::cast_slice(&models),
                usage: wgpu::BufferUsages::STORAGE,
            });
        let uniform_buf = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("casters globals"),
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
            label: Some("casters bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: models_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&diffuse),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&specular),
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
            models_buf,
            uniform_buf,
            bind_group,
            light_cube: LightCube::new(ctx),
            kind: Kind::Point,
            light_pos: Vec3::new(1.2, 1.0, 2.0),
            light_dir: Vec3::new(-0.2, -1.0, -0.3),
            cut_off_deg: 12.5,
            outer_cut_off_deg: 17.5,
            shininess: 32,
            spotlight_from_camera: true,
        }
    }
}

impl Chapter for LightCasters {
    fn ui(&mut self, ui: &mut egui::Ui) {
        egui::ComboBox::from_label("Caster")
            .selected_text(match self.kind {
                Kind::Directional => "directional",
                Kind::Point => "point",
                Kind::Spot => "spotlight",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.kind, Kind::Directional, "directional");
                ui.selectable_value(&mut self.kind, Kind::Point, "point");
                ui.selectable_value(&mut self.kind, Kind::Spot, "spotlight");
            });

        ui.add(egui::Slider::new(&mut self.shininess, 2..=256).text("shininess"));

        match self.kind {
            Kind::Directional => {
                ui.label("Direction");
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut self.light_dir.x).speed(0.02));
                    ui.add(egui::DragValue::new(&mut self.light_dir.y).speed(0.02));
                    ui.add(egui::DragValue::new(&mut self.light_dir.z).speed(0.02));
                });
            }
            Kind::Point => {
                ui.label("Position");
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut self.light_pos.x).speed(0.05));
                    ui.add(egui::DragValue::new(&mut self.light_pos.y).speed(0.05));
                    ui.add(egui::DragValue::new(&mut self.light_pos.z).speed(0.05));
                });
            }
            Kind::Spot => {
                ui.checkbox(&mut self.spotlight_from_camera, "Attach to camera");
                ui.add(
                    egui::Slider::new(&mut self.cut_off_deg, 1.0..=45.0).text("cut off"),
                );
                ui.add(
                    egui::Slider::new(&mut self.outer_cut_off_deg, 1.0..=60.0)
                        .text("outer cut off"),
                );
                // a soft edge needs outer > inner
                self.outer_cut_off_deg = self.outer_cut_off_deg.max(self.cut_off_deg + 0.5);
            }
        }
    }

    fn update(&mut self, queue: &wgpu::Queue, scene: &SceneParams) {
        let view_proj = scene.projection * scene.view;

        let (position, direction) = match self.kind {
            Kind::Directional => (Vec3::ZERO, self.light_dir),
            Kind::Point => (self.light_pos, self.light_dir),
            Kind::Spot if self.spotlight_from_camera => {
                // flashlight: cast from the eye along the view direction
                let forward = scene.view.inverse().transform_vector3(Vec3::NEG_Z);
                (scene.camera_pos, forward)
            }
            Kind::Spot => (self.light_pos, self.light_dir),
        };

        let light = Light {
            position: position.extend(1.0),
            direction: direction.extend(0.0),
            ambient: Vec4::new(0.2, 0.2, 0.2, 1.0),
            diffuse: Vec4::new(0.5, 0.5, 0.5, 1.0),
            specular: Vec4::ONE,
            cone: Vec4::new(
                self.cut_off_deg.to_radians().cos(),
                self.outer_cut_off_deg.to_radians().cos(),
                0.09,   // linear attenuation
                0.032,  // quadratic attenuation
            ),
            misc: Vec4::new(self.kind.as_index(), self.shininess as f32, 1.0, 0.0),
        };
        let globals = Globals {
            view_proj,
            view_pos: scene.camera_pos.extend(1.0),
            light,
        };
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&globals));
        self.light_cube.update(queue, view_proj, position, Vec3::ONE);
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, Some(&self.bind_group), &[]);
        pass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        pass.draw(0..36, 0..10);

        // a marker cube makes no sense for a purely directional light
        if self.kind == Kind::Point || (self.kind == Kind::Spot && !self.spotlight_from_camera)
        {
            self.light_cube.draw(pass);
        }
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
