use glam::{Mat4, Vec3};

use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::chapters::cube_field::CubeField;

/// Model/view/projection split: ten cubes under a fixed view, before the
/// camera chapter takes over the view matrix.
pub struct CoordinateSystems {
    field: CubeField,
    spin: bool,
}

impl CoordinateSystems {
    pub fn new(ctx: &RenderContext) -> Self {
        Self {
            field: CubeField::new(ctx),
            spin: true,
        }
    }
}

impl Chapter for CoordinateSystems {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.checkbox(&mut self.spin, "Spin every third cube");
    }

    fn update(&mut self, queue: &wgpu::Queue, scene: &SceneParams) {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));
        let projection =
            Mat4::perspective_rh(45.0_f32.to_radians(), scene.aspect, 0.1, 100.0);
        let models = CubeField::classic_models(scene.time, self.spin);
        self.field.update(queue, projection * view, &models);
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.field.draw(pass);
    }
}
