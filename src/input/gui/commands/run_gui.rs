use std::marker::PhantomData;

use log::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        self.config.validate()?;

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.title.as_str())
                .with_inner_size(LogicalSize::new(
                    self.config.window_width,
                    self.config.window_height,
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, &self.config)?;
        let controller = InteractiveController::new(self.config.clone())?;

        info!(
            "starting {}x{} viewer: {} render bands, downsample factor {}, {} fps target",
            self.config.window_width,
            self.config.window_height,
            controller.max_bands(),
            self.config.downsample_factor,
            self.config.target_fps
        );

        let app = GuiApp::new(window, &event_loop, presenter, controller);
        let result = app.run(window, event_loop);

        info!("viewer closed");

        result
    }
}
