mod animated_dropdown;
mod loading;
mod polling;
mod trace;

pub use animated_dropdown::AnimatedDropdown;
pub use loading::{LoadingOpacityContainer, LoadingRow};
pub use polling::PollingSpinner;
pub use trace::Trace;
