use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::chapters::cube_field::CubeField;

/// The cube field again, but the view and projection now come from the
/// free-fly camera (WASD + right-drag + scroll zoom).
pub struct CameraChapter {
    field: CubeField,
    spin: bool,
}

impl CameraChapter {
    pub fn new(ctx: &RenderContext) -> Self {
        Self {
            field: CubeField::new(ctx),
            spin: false,
        }
    }
}

impl Chapter for CameraChapter {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.checkbox(&mut self.spin, "Spin every third cube");
        ui.separator();
        ui.label("W/S/A/D: move");
        ui.label("Right drag: look");
        ui.label("Scroll: zoom (FOV 1-45)");
    }

    fn update(&mut self, queue: &wgpu::Queue, scene: &SceneParams) {
        let models = CubeField::classic_models(scene.time, self.spin);
        self.field
            .update(queue, scene.projection * scene.view, &models);
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.field.draw(pass);
    }
}
