pub mod constants;
pub mod contact;
pub mod lightbox;
pub mod particles;

pub use contact::*;
pub use lightbox::*;
pub use particles::*;
