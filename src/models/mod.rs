pub mod cmyk;
pub mod rgb;
pub mod xyz;

pub use cmyk::Cmyk;
pub use rgb::{Rgb8, Srgb, SrgbLinear};
pub use xyz::Xyz;
