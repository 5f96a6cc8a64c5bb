// Looping carousel state, independent of any UI toolkit
pub mod easing;
pub mod state;

pub use easing::CubicBezier;
pub use state::{
    Carousel, CarouselEvent, CarouselTiming, AUTO_DELAY, SETTLE_DELAY, TRACK_COPIES,
    TRANSITION_DURATION,
};
