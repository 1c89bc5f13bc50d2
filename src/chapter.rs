use glam::{Mat4, Vec3};

use crate::chapters;

/// GPU handles a chapter needs at construction time.
pub struct RenderContext<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub format: wgpu::TextureFormat,
}

/// Per-frame values shared with the active chapter.
#[derive(Debug, Clone, Copy)]
pub struct SceneParams {
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_pos: Vec3,
    /// Viewport aspect ratio, for chapters that build their own projection.
    pub aspect: f32,
    /// Seconds since the viewer started.
    pub time: f32,
}

/// One tutorial chapter: owns its pipelines and buffers, exposes its
/// tweakables as egui widgets, and records its draws into the frame pass.
pub trait Chapter {
    /// Chapter-specific widgets for the inspector panel.
    fn ui(&mut self, ui: &mut egui::Ui);

    /// Write this frame's uniforms.
    fn update(&mut self, queue: &wgpu::Queue, scene: &SceneParams);

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>);

    fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: 0.2,
            g: 0.3,
            b: 0.3,
            a: 1.0,
        }
    }
}

pub type ChapterCtor = fn(&RenderContext) -> Box<dyn Chapter>;

/// Curriculum order; the panel combo indexes into this.
pub const CHAPTERS: &[(&str, ChapterCtor)] = &[
    ("01 getting started / hello window", |ctx| {
        Box::new(chapters::hello_window::HelloWindow::new(ctx))
    }),
    ("01 getting started / hello triangle", |ctx| {
        Box::new(chapters::hello_triangle::HelloTriangle::new(ctx))
    }),
    ("01 getting started / shaders", |ctx| {
        Box::new(chapters::shaders::Shaders::new(ctx))
    }),
    ("01 getting started / textures", |ctx| {
        Box::new(chapters::textures::Textures::new(ctx))
    }),
    ("01 getting started / transformations", |ctx| {
        Box::new(chapters::transformations::Transformations::new(ctx))
    }),
    ("01 getting started / coordinate systems", |ctx| {
        Box::new(chapters::coordinate_systems::CoordinateSystems::new(ctx))
    }),
    ("01 getting started / camera", |ctx| {
        Box::new(chapters::camera::CameraChapter::new(ctx))
    }),
    ("02 lighting / colors", |ctx| {
        Box::new(chapters::colors::Colors::new(ctx))
    }),
    ("02 lighting / basic lighting", |ctx| {
        Box::new(chapters::basic_lighting::BasicLighting::new(ctx))
    }),
    ("02 lighting / materials", |ctx| {
        Box::new(chapters::materials::Materials::new(ctx))
    }),
    ("02 lighting / lighting maps", |ctx| {
        Box::new(chapters::lighting_maps::LightingMaps::new(ctx))
    }),
    ("02 lighting / light casters", |ctx| {
        Box::new(chapters::light_casters::LightCasters::new(ctx))
    }),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_labels_are_unique_and_ordered_by_section() {
        let labels: Vec<&str> = CHAPTERS.iter().map(|(label, _)| *label).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels, deduped);
        assert!(labels.first().unwrap().starts_with("01"));
        assert!(labels.last().unwrap().starts_with("02"));
        assert_eq!(labels.len(), 12);
    }
}
