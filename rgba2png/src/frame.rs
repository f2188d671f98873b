use stellar_shared::constants::framebuffer::{frame_size, BYTES_PER_PIXEL};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("frame dimensions must be non zero, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    #[error("frame of {width}x{height} is too large to address")]
    TooLarge { width: u32, height: u32 },
    #[error("expected {expected} bytes for a {width}x{height} RGBA frame, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub fn expected_size(width: u32, height: u32) -> Result<usize, FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::ZeroSize { width, height });
    }
    frame_size(width, height).ok_or(FrameError::TooLarge { width, height })
}

pub fn calc_offset(width: usize, height: usize, x: usize, y: usize) -> Option<usize> {
    if x < width && y < height {
        return Some((y * width + x) * BYTES_PER_PIXEL);
    }
    None
}

/// A tightly packed RGBA8 buffer, rows top to bottom as they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RawFrame {
    pub fn from_bytes(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = expected_size(width, height)?;
        if data.len() != expected {
            return Err(FrameError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(RawFrame { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = calc_offset(self.width as usize, self.height as usize, x as usize, y as usize)?;
        let px = &self.data[offset..offset + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        let err = RawFrame::from_bytes(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            FrameError::SizeMismatch { width: 2, height: 2, expected: 16, actual: 15 }
        );
        assert!(RawFrame::from_bytes(2, 2, vec![0; 17]).is_err());
        assert!(RawFrame::from_bytes(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            RawFrame::from_bytes(0, 10, vec![]).unwrap_err(),
            FrameError::ZeroSize { width: 0, height: 10 }
        );
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        // 3x2, pixel n is [n, n, n, 255]
        let data: Vec<u8> = (0..6u8).flat_map(|n| [n, n, n, 255]).collect();
        let frame = RawFrame::from_bytes(3, 2, data).unwrap();
        assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(frame.pixel(2, 0), Some([2, 2, 2, 255]));
        assert_eq!(frame.pixel(0, 1), Some([3, 3, 3, 255]));
        assert_eq!(frame.pixel(2, 1), Some([5, 5, 5, 255]));
        assert_eq!(frame.pixel(3, 0), None);
        assert_eq!(frame.pixel(0, 2), None);
    }

    #[test]
    fn offsets() {
        assert_eq!(calc_offset(1280, 720, 1, 1), Some((1280 + 1) * 4));
        assert_eq!(calc_offset(1280, 720, 1280, 0), None);
    }
}
