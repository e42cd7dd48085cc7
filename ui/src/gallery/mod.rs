mod engine;
pub use engine::{Direction, GalleryState, VisibleSlot};

mod view;
pub use view::GalleryCarousel;
