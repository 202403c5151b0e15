use winit::window::Window;

use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, config: &ViewerConfig) -> Result<T, GuiError>;
}
