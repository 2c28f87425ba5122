pub mod age_gate;
pub mod picker;
pub mod stats;

pub use age_gate::AgeGateView;
pub use picker::PickerView;
pub use stats::StatsView;
