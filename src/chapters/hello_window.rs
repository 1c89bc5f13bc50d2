use crate::chapter::{Chapter, RenderContext, SceneParams};

/// Nothing but a clear color, same as the first LearnOpenGL program.
pub struct HelloWindow {
    clear: [f32; 3],
}

impl HelloWindow {
    pub fn new(_ctx: &RenderContext) -> Self {
        Self {
            clear: [0.2, 0.3, 0.3],
        }
    }
}

impl Chapter for HelloWindow {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label("Clear color");
        ui.color_edit_button_rgb(&mut self.clear);
    }

    fn update(&mut self, _queue: &wgpu::Queue, _scene: &SceneParams) {}

    fn draw(&self, _pass: &mut wgpu::RenderPass<'_>) {}

    fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.clear[0] as f64,
            g: self.clear[1] as f64,
            b: self.clear[2] as f64,
            a: 1.0,
        }
    }
}
