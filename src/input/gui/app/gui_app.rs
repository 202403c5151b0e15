use std::time::Instant;

use egui::{Color32, Context, RichText};
use egui_winit::State as EguiWinitState;
use log::{error, info};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::overlay::{OverlayText, format_fps};
use crate::core::data::point::ScreenPosition;
use crate::input::gui::app::fps_counter::FpsCounter;
use crate::input::gui::app::frame_pacer::FramePacer;
use crate::input::gui::app::mouse_input::MouseInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

const PANEL_POS: [f32; 2] = [5.0, 5.0];
const PANEL_MARGIN: f32 = 10.0;
const PANEL_INNER_SIZE: [f32; 2] = [310.0, 65.0];
const TITLE_SIZE: f32 = 20.0;
const DETAIL_SIZE: f32 = 10.0;
const FPS_OFFSET: [f32; 2] = [-10.0, 10.0];

const SKY_BLUE: Color32 = Color32::from_rgba_premultiplied(71, 134, 178, 178);
const BLUE: Color32 = Color32::from_rgb(0, 121, 241);
const DARK_BLUE: Color32 = Color32::from_rgb(0, 82, 172);
const LIME: Color32 = Color32::from_rgb(0, 158, 47);

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    pub controller: InteractiveController,
    mouse: MouseInputState,
    fps: FpsCounter,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            scale_factor,
            presenter,
            controller,
            mouse: MouseInputState::default(),
            fps: FpsCounter::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the event loop until the window closes or Escape is pressed.
    ///
    /// The app, and with it both textures, is dropped before this returns.
    pub fn run(self, window: &'static Window, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let mut pacer = FramePacer::new(self.controller.config().frame_interval(), Instant::now());
        let mut failure: Option<GuiError> = None;
        let mut app = Some(self);

        event_loop.run(|event, elwt| {
            if let Event::LoopExiting = event {
                if app.take().is_some() {
                    info!("released textures, closing window");
                }
                return;
            }

            let Some(app) = app.as_mut() else {
                return;
            };

            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let consumed = app.forward_to_egui(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::KeyboardInput { event: key, .. }
                            if key.physical_key == PhysicalKey::Code(KeyCode::Escape)
                                && key.state == ElementState::Pressed =>
                        {
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            if let Err(err) = app.run_frame(window) {
                                error!("render error: {}", err);
                                failure = Some(err);
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            if size.width > 0 && size.height > 0 {
                                if let Err(err) = app.presenter.resize_surface(size.width, size.height) {
                                    error!("surface resize failed: {}", err);
                                    failure = Some(err);
                                    elwt.exit();
                                }
                            }
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        }
                        WindowEvent::Focused(false) => {
                            app.mouse.focus_lost();
                        }
                        _ if !consumed => app.handle_input_event(event),
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if pacer.poll(Instant::now()) {
                        window.request_redraw();
                    }
                    elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
                }
                _ => {}
            }
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Feeds `event` to egui and reports whether egui claimed it.
    ///
    /// Repaint requests are ignored: the frame pacer drives every redraw.
    fn forward_to_egui(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    fn handle_input_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.scale_factor);
                self.mouse.handle_cursor_moved(ScreenPosition {
                    x: logical.x,
                    y: logical.y,
                });
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse.handle_wheel(*delta);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse.handle_mouse_button(*button, *state);
            }
            WindowEvent::KeyboardInput { event: key, .. } => {
                if let PhysicalKey::Code(key_code) = key.physical_key {
                    self.mouse.handle_key_event(key_code, key.state, key.repeat);
                }
            }
            _ => {}
        }
    }

    /// One controller frame: input, render if needed, then draw.
    pub fn run_frame(&mut self, window: &Window) -> Result<(), GuiError> {
        let input = self.mouse.take_frame_input();
        self.controller.handle_input(&input);
        self.controller.render_if_needed(&mut self.presenter);
        self.fps.record_frame(Instant::now());

        let egui_output = self.update_ui(window);
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        self.presenter
            .render(self.controller.active_resolution(), egui_output, &self.egui_ctx)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let overlay = self.controller.overlay();
        let fps = self.fps.fps();

        self.egui_ctx.run(raw_input, |ctx| {
            draw_overlay(ctx, &overlay, fps);
        })
    }
}

fn draw_overlay(ctx: &Context, overlay: &OverlayText, fps: u32) {
    egui::Area::new("mandelbrot_overlay")
        .fixed_pos(PANEL_POS)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(SKY_BLUE)
                .stroke(egui::Stroke::new(1.0, BLUE))
                .rounding(6.0)
                .inner_margin(egui::Margin::same(PANEL_MARGIN))
                .show(ui, |ui| {
                    ui.set_min_size(PANEL_INNER_SIZE.into());
                    ui.set_max_width(PANEL_INNER_SIZE[0]);
                    ui.spacing_mut().item_spacing.y = 4.0;

                    ui.label(RichText::new(overlay.title()).color(BLUE).size(TITLE_SIZE));
                    for line in overlay.details() {
                        ui.label(RichText::new(line).color(DARK_BLUE).size(DETAIL_SIZE));
                    }
                });
        });

    egui::Area::new("fps")
        .anchor(egui::Align2::RIGHT_TOP, FPS_OFFSET)
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(RichText::new(format_fps(fps)).color(LIME).size(TITLE_SIZE));
        });
}
