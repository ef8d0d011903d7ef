//! Events emitted by the UI layer

use crate::surface::SliderChannel;
use surfacelab_materials::MaterialKind;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// A model name from the registry was picked
    ModelSelected(String),
    PresetSelected(MaterialKind),
    /// A slider moved to a value in [0, 1]
    SliderChanged(SliderChannel, f32),
}
