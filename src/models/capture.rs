// Data structures for camera capture

/// A captured frame from the camera
///
/// Produced by the capture layer and consumed opaquely by the pose
/// estimator bridge; the counting core never looks at pixel data.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub timestamp: i64,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl RawFrame {
    pub fn new(timestamp: i64, width: u32, height: u32, data: Vec<u8>, format: PixelFormat) -> Self {
        Self {
            timestamp,
            width,
            height,
            data,
            format,
        }
    }
}

/// Pixel format of captured frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGBA8,
    BGRA8,
}
