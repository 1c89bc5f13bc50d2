//! The tutorial curriculum, one module per chapter, in teaching order.

mod cube_field;
mod light_cube;

pub mod basic_lighting;
pub mod camera;
pub mod colors;
pub mod coordinate_systems;
pub mod hello_triangle;
pub mod hello_window;
pub mod light_casters;
pub mod lighting_maps;
pub mod materials;
pub mod shaders;
pub mod textures;
pub mod transformations;
