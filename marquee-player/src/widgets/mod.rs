pub mod marquee_strip;

pub use marquee_strip::{MarqueeStrip, marquee_strip};
