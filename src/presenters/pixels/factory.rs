use winit::window::Window;

use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window, config: &ViewerConfig) -> Result<PixelsPresenter, GuiError> {
        PixelsPresenter::new(window, config)
    }
}
