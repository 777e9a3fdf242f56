pub mod animation;
pub mod seesaw;

pub use animation::AnimationState;
pub use seesaw::Seesaw;
