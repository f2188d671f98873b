pub mod sdl2;
pub mod framebuffer;

pub const LIBRARY_NAME: &str = "Hyperwarp";
