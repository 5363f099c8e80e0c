pub mod class;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod marker;
pub mod region;
pub mod toggle;

pub use class::ClassList;
pub use document::Document;
pub use element::{find_element, find_element_mut, Element};
pub use event::{Event, MouseButton};
pub use hit::hit_test;
pub use marker::MarkerBackend;
pub use region::{Rect, RegionMap};
pub use toggle::{bind_toggles, BindingError, TargetMarker, ToggleBinding, ToggleController};
