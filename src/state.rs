use std::sync::Arc;
use std::time::Instant;

use glam::{Mat4, Vec3};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::window::Window;

use crate::camera::{Camera, CameraConfig, PITCH_LIMIT};
use crate::chapter::{CHAPTERS, Chapter, RenderContext, SceneParams};
use crate::gui::{Gui, PANEL_WIDTH};
use crate::input::{ControlMode, InputHandler};
use crate::texture;

pub struct State {
    window: Arc<Window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    size: winit::dpi::PhysicalSize<u32>,
    surface: wgpu::Surface<'static>,
    surface_format: wgpu::TextureFormat,
    depth_view: wgpu::TextureView,

    gui: Gui,
    camera: Camera,
    input: InputHandler,
    control_mode: ControlMode,

    chapter_index: usize,
    chapter: Box<dyn Chapter>,

    started: Instant,
    last_frame: Instant,
}

impl State {
    pub async fn new(window: Arc<Window>) -> State {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await
            .unwrap();
        log::info!("adapter: {}", adapter.get_info().name);
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .unwrap();

        let size = window.inner_size();

        let surface = instance.create_surface(window.clone()).unwrap();
        let cap = surface.get_capabilities(&adapter);
        let surface_format = cap.formats[0];

        let depth_view = texture::create_depth_view(&device, size.width, size.height);

        let gui = Gui::new(&window, &device, surface_format.add_srgb_suffix());

        // the classic starting point: three units back, looking down -Z
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), CameraConfig::default());

        let chapter_index = 0;
        let chapter = Self::build_chapter(&device, &queue, surface_format, chapter_index);

        let now = Instant::now();
        let state = State {
            window,
            device,
            queue,
            size,
            surface,
            surface_format,
            depth_view,
            gui,
            camera,
            input: InputHandler::new(),
            control_mode: ControlMode::Gui,
            chapter_index,
            chapter,
            started: now,
            last_frame: now,
        };

        state.configure_surface();

        state
    }

    fn build_chapter(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        index: usize,
    ) -> Box<dyn Chapter> {
        let (label, ctor) = CHAPTERS[index];
        log::info!("chapter: {label}");
        ctor(&RenderContext {
            device,
            queue,
            format: surface_format.add_srgb_suffix(),
        })
    }

    fn configure_surface(&self) {
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: self.surface_format,
            view_formats: vec![self.surface_format.add_srgb_suffix()],
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            width: self.size.width,
            height: self.size.height,
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::AutoVsync,
        };
        self.surface.configure(&self.device, &surface_config);
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.size = new_size;
        self.configure_surface();
        self.depth_view =
            texture::create_depth_view(&self.device, new_size.width, new_size.height);
    }

    /// Route a window event through the GUI first, then (in keyboard mode)
    /// to the camera input handler.
    pub fn process_event(&mut self, event: &WindowEvent) {
        if self.gui.on_event(&self.window, event) {
            // a right-button release over the panel still has to end the
            // drag, or the look gate stays stuck on
            if let WindowEvent::MouseInput {
                button: MouseButton::Right,
                state: ElementState::Released,
                ..
            } = event
            {
                self.input.release_rotate();
            }
            return;
        }
        if self.control_mode == ControlMode::Keyboard {
            let _ = self.input.handle_event(&mut self.camera, event);
        }
    }

    pub fn render(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        let time = now.duration_since(self.started).as_secs_f32();

        if self.control_mode == ControlMode::Keyboard {
            self.input.advance(&mut self.camera, dt);
        }

        let viewport_width = (self.size.width as f32
            - PANEL_WIDTH * self.window.scale_factor() as f32)
            .max(1.0);
        let aspect = viewport_width / self.size.height.max(1) as f32;

        let scene = SceneParams {
            view: self.camera.view_matrix(),
            projection: Mat4::perspective_rh(
                self.camera.fov().to_radians(),
                aspect,
                0.1,
                100.0,
            ),
            camera_pos: self.camera.position(),
            aspect,
            time,
        };
        self.chapter.update(&self.queue, &scene);

        let surface_texture = self
            .surface
            .get_current_texture()
            .expect("failed to acquire next swapchain texture");
        let texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.surface_format.add_srgb_suffix()),
                ..Default::default()
            });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor::default());

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("chapter"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.chapter.clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_viewport(
                0.0,
                0.0,
                viewport_width,
                self.size.height as f32,
                0.0,
                1.0,
            );
            self.chapter.draw(&mut pass);
        }

        // disjoint field borrows for the panel closure
        let camera = &mut self.camera;
        let input = &mut self.input;
        let control_mode = &mut self.control_mode;
        let chapter = &mut self.chapter;
        let mut selected = self.chapter_index;

        self.gui.render(
            &self.window,
            &self.device,
            &self.queue,
            &mut encoder,
            &texture_view,
            self.size,
            |ctx| {
                egui::SidePanel::right("inspector")
                    .exact_width(PANEL_WIDTH)
                    .resizable(false)
                    .show(ctx, |ui| {
                        inspector_ui(ui, camera, input, control_mode, chapter, &mut selected);
                    });
            },
        );

        self.queue.submit([encoder.finish()]);
        self.window.pre_present_notify();
        surface_texture.present();

        if selected != self.chapter_index {
            self.chapter_index = selected;
            self.chapter = Self::build_chapter(
                &self.device,
                &self.queue,
                self.surface_format,
                selected,
            );
        }
    }

    pub fn get_window(&self) -> &Window {
        &self.window
    }
}

/// The right-hand panel: camera controls, chapter selection, and the
/// active chapter's own widgets.
fn inspector_ui(
    ui: &mut egui::Ui,
    camera: &mut Camera,
    input: &mut InputHandler,
    control_mode: &mut ControlMode,
    chapter: &mut Box<dyn Chapter>,
    selected: &mut usize,
) {
    ui.heading("Main setting");

    let mode_before = *control_mode;
    egui::ComboBox::from_label("Cam mode")
        .selected_text(match control_mode {
            ControlMode::Gui => "GUI",
            ControlMode::Keyboard => "Keyboard",
        })
        .show_ui(ui, |ui| {
            ui.selectable_value(control_mode, ControlMode::Gui, "GUI");
            ui.selectable_value(control_mode, ControlMode::Keyboard, "Keyboard");
        });
    if *control_mode != mode_before {
        // drop held keys and the drag baseline on every mode switch
        input.clear();
    }

    match control_mode {
        ControlMode::Gui => {
            ui.horizontal(|ui| {
                ui.label("Cam position");
                if ui.small_button("reset").clicked() {
                    camera.set_position(Vec3::new(0.0, 0.0, 3.0));
                }
            });
            let mut pos = camera.position();
            let changed = ui
                .horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut pos.x).speed(0.1)).changed()
                        | ui.add(egui::DragValue::new(&mut pos.y).speed(0.1)).changed()
                        | ui.add(egui::DragValue::new(&mut pos.z).speed(0.1)).changed()
                })
                .inner;
            if changed {
                camera.set_position(pos);
            }

            ui.horizontal(|ui| {
                ui.label("Cam rotation");
                if ui.small_button("reset").clicked() {
                    camera.set_rotation(-90.0, 0.0);
                }
            });
            let mut yaw = camera.yaw();
            let mut pitch = camera.pitch();
            let changed = ui
                .add(egui::Slider::new(&mut yaw, -360.0..=360.0).text("yaw"))
                .changed()
                | ui.add(
                    egui::Slider::new(&mut pitch, -PITCH_LIMIT..=PITCH_LIMIT).text("pitch"),
                )
                .changed();
            if changed {
                camera.set_rotation(yaw, pitch);
            }
        }
        ControlMode::Keyboard => {
            ui.label("Keyboard");
            ui.label("- W: forward\n- S: backward\n- A: left\n- D: right");
            ui.label("Mouse");
            ui.label("- right drag: look\n- scroll: zoom");
        }
    }

    ui.separator();

    ui.heading("Select tutorial");
    egui::ComboBox::from_label("Chapter")
        .selected_text(CHAPTERS[*selected].0)
        .show_ui(ui, |ui| {
            for (i, (label, _)) in CHAPTERS.iter().enumerate() {
                ui.selectable_value(selected, i, *label);
            }
        });

    ui.separator();

    ui.heading(CHAPTERS[*selected].0);
    chapter.ui(ui);
}
