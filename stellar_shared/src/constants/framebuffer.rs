// raw framebuffer dumps are tightly packed RGBA8, row-major

pub const BYTES_PER_PIXEL: usize = 4;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;

// host behavior writes frames to /dev/shm/<session id>.raw
pub const SHM_DIR: &str = "/dev/shm";
pub const RAW_EXTENSION: &str = "raw";
pub const PNG_EXTENSION: &str = "png";

pub fn frame_size(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}
