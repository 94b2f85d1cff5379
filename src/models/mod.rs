pub mod card;
pub mod image;
pub mod price;
pub mod serie;
pub mod set;
pub mod sub;
pub mod timestamp;

pub use card::*;
pub use image::{ImageFormat, ImageQuality};
pub use price::*;
pub use serie::*;
pub use set::*;
pub use sub::*;
