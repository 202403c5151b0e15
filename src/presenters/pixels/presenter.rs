use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{debug, warn};
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::window::Window;

use crate::controllers::interactive::data::resolution::Resolution;
use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::controllers::interactive::ports::texture_sink::TextureSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_size::PixelSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::texture::FrameTexture;

/// Draws the active texture through the pixels scaling pass, then egui on top.
///
/// The pixels frame buffer is resized to whichever texture is active, so the
/// low-resolution texture is stretched over the window by nearest-neighbour
/// scaling and the full-resolution one maps 1:1.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    full_res: FrameTexture,
    low_res: FrameTexture,
    frame_size: PixelSize,
    /// Texture and revision currently copied into the pixels frame.
    shown: Option<(Resolution, u64)>,
    surface_width: u32,
    surface_height: u32,
}

impl TextureSink for PixelsPresenter {
    fn upload(&mut self, resolution: Resolution, buffer: &PixelBuffer) {
        if let Err(err) = self.texture_mut(resolution).upload(buffer) {
            warn!("skipping {} resolution upload: {}", resolution.label(), err);
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        active: Resolution,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.present_texture(active)?;

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Overlay on top of the fractal
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.surface_width = width;
        self.surface_height = height;
        self.pixels.resize_surface(width, height)?;

        Ok(())
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, config: &ViewerConfig) -> Result<Self, GuiError> {
        let surface = window.inner_size();
        let display_size = config.display_size()?;
        let low_res_size = config.low_res_size()?;

        let surface_texture = SurfaceTexture::new(surface.width, surface.height, window);
        let pixels = Pixels::new(display_size.width(), display_size.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            full_res: FrameTexture::new(display_size),
            low_res: FrameTexture::new(low_res_size),
            frame_size: display_size,
            shown: None,
            surface_width: surface.width,
            surface_height: surface.height,
        })
    }

    fn texture_mut(&mut self, resolution: Resolution) -> &mut FrameTexture {
        match resolution {
            Resolution::Full => &mut self.full_res,
            Resolution::Low => &mut self.low_res,
        }
    }

    /// Copies `active` into the pixels frame if it is not already shown there.
    fn present_texture(&mut self, active: Resolution) -> Result<(), GuiError> {
        let texture = match active {
            Resolution::Full => &self.full_res,
            Resolution::Low => &self.low_res,
        };

        if self.shown == Some((active, texture.revision())) {
            return Ok(());
        }

        if self.frame_size != texture.size() {
            let size = texture.size();
            debug!("resizing pixels buffer to {}x{}", size.width(), size.height());
            self.pixels.resize_buffer(size.width(), size.height())?;
            self.frame_size = size;
        }

        self.pixels.frame_mut().copy_from_slice(texture.rgba());
        self.shown = Some((active, texture.revision()));

        Ok(())
    }
}
