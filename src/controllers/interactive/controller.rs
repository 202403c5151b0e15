use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use log::trace;

use crate::controllers::interactive::data::frame_input::FrameInput;
use crate::controllers::interactive::data::interaction_state::InteractionState;
use crate::controllers::interactive::data::resolution::Resolution;
use crate::controllers::interactive::data::viewer_config::{ViewerConfig, ViewerConfigError};
use crate::controllers::interactive::overlay::OverlayText;
use crate::controllers::interactive::ports::texture_sink::TextureSink;
use crate::controllers::interactive::render::{RenderOutcome, RenderTarget, render_viewport};
use crate::core::actions::generation::RenderGeneration;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_threads_for_row_banding::calculate_threads_for_row_banding;

/// Frame-by-frame pan/zoom state machine driving the renderer.
///
/// Owns the viewport, both raster buffers and the render generation. Each
/// frame the caller feeds it a [`FrameInput`], then asks it to render; the
/// renderer borrows one of the buffers for the duration of the call.
pub struct InteractiveController {
    config: ViewerConfig,
    display_size: PixelSize,
    viewport: Viewport,
    interaction: InteractionState,
    needs_redraw: bool,
    generation: Arc<RenderGeneration>,
    full_res: PixelBuffer,
    low_res: PixelBuffer,
    max_bands: NonZeroU32,
    last_render_duration: Option<Duration>,
}

impl InteractiveController {
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerConfigError> {
        Self::with_max_bands(config, calculate_threads_for_row_banding())
    }

    pub fn with_max_bands(
        config: ViewerConfig,
        max_bands: NonZeroU32,
    ) -> Result<Self, ViewerConfigError> {
        config.validate()?;

        let display_size = config.display_size()?;
        let low_res_size = config.low_res_size()?;

        Ok(Self {
            display_size,
            viewport: config.initial_viewport,
            interaction: InteractionState::default(),
            needs_redraw: true,
            generation: Arc::new(RenderGeneration::new()),
            full_res: PixelBuffer::new(display_size),
            low_res: PixelBuffer::new(low_res_size),
            max_bands,
            last_render_duration: None,
            config,
        })
    }

    /// Applies one frame of input. Returns whether the view needs a fresh render.
    pub fn handle_input(&mut self, input: &FrameInput) -> bool {
        let mut interacted = false;

        if input.wheel != 0.0 {
            interacted |= self.zoom(input);
        }

        interacted |= self.pan(input);

        if input.reset_view {
            self.reset_view();
            interacted = true;
        }

        if interacted {
            let generation = self.generation.bump();
            self.needs_redraw = true;
            trace!("interaction, generation now {}", generation);
        }

        interacted
    }

    fn zoom(&mut self, input: &FrameInput) -> bool {
        let Some(zoomed) = self.viewport.zoomed_about(
            input.mouse,
            self.display_size,
            input.wheel,
            self.config.zoom_factor,
        ) else {
            trace!("ignoring zoom of {} notches at the limit of precision", input.wheel);
            return false;
        };

        trace!(
            "zoom {} notches to width {:e}, iterations {}",
            input.wheel,
            zoomed.complex_width(),
            zoomed.iter_limit()
        );

        self.viewport = zoomed;
        self.interaction.low_res_active = false;

        true
    }

    fn pan(&mut self, input: &FrameInput) -> bool {
        let mut interacted = false;

        if input.left_pressed {
            self.interaction = InteractionState {
                is_panning: true,
                pan_start_mouse: input.mouse,
                pan_start_center: self.viewport.center(),
                low_res_active: true,
            };
            trace!("pan started at ({}, {})", input.mouse.x, input.mouse.y);
            interacted = true;
        }

        if !self.interaction.is_panning {
            return interacted;
        }

        if input.left_down {
            let delta = input.mouse - self.interaction.pan_start_mouse;

            if !delta.is_zero() {
                let panned = self.viewport.panned_from(
                    self.interaction.pan_start_center,
                    delta,
                    self.display_size,
                );

                if panned != self.viewport {
                    self.viewport = panned;
                    self.interaction.low_res_active = true;
                    interacted = true;
                }
            }
        }

        if input.left_released {
            self.interaction.is_panning = false;
            self.interaction.low_res_active = false;
            trace!("pan released");
            interacted = true;
        }

        interacted
    }

    fn reset_view(&mut self) {
        trace!("view reset");
        self.viewport = self.config.initial_viewport;
        self.interaction = InteractionState::default();
    }

    /// Renders the active buffer if the view changed since the last committed render.
    ///
    /// The redraw flag is only cleared when the generation is unchanged after
    /// the render, so a superseded render is retried next frame.
    pub fn render_if_needed<S>(&mut self, sink: &mut S) -> Option<RenderOutcome>
    where
        S: TextureSink + ?Sized,
    {
        if !self.needs_redraw {
            return None;
        }

        let started_at = self.generation.current();
        let resolution = self.active_resolution();
        let buffer = match resolution {
            Resolution::Full => &mut self.full_res,
            Resolution::Low => &mut self.low_res,
        };

        let outcome = render_viewport(
            &self.viewport,
            RenderTarget { resolution, buffer },
            &self.generation,
            started_at,
            self.max_bands,
            sink,
        );

        if let RenderOutcome::Committed { duration } = outcome {
            self.last_render_duration = Some(duration);
        }

        if self.generation.is_current(started_at) {
            self.needs_redraw = false;
        }

        Some(outcome)
    }

    #[must_use]
    pub fn active_resolution(&self) -> Resolution {
        if self.interaction.low_res_active {
            Resolution::Low
        } else {
            Resolution::Full
        }
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayText {
        OverlayText::for_viewport(&self.viewport)
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.current()
    }

    /// Shared handle to the generation counter the renders are checked against.
    #[must_use]
    pub fn generation_counter(&self) -> Arc<RenderGeneration> {
        Arc::clone(&self.generation)
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.interaction.is_panning
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn max_bands(&self) -> NonZeroU32 {
        self.max_bands
    }

    #[must_use]
    pub fn buffer(&self, resolution: Resolution) -> &PixelBuffer {
        match resolution {
            Resolution::Full => &self.full_res,
            Resolution::Low => &self.low_res,
        }
    }
}
