// Frame acquisition seam between the capture device and the session driver

use crate::models::capture::RawFrame;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Source of camera frames for a workout session
///
/// The real implementation wraps a camera device in the capture layer;
/// the session driver only ever pulls one frame at a time.
#[async_trait]
pub trait FrameSource: Send {
    /// Wait for the next frame; `None` once the stream has ended
    async fn next_frame(&mut self) -> Option<RawFrame>;
}

/// Adapts an mpsc receiver fed by a capture task
pub struct ChannelFrameSource {
    rx: mpsc::Receiver<RawFrame>,
}

impl ChannelFrameSource {
    pub fn new(rx: mpsc::Receiver<RawFrame>) -> Self {
        Self { rx }
    }
}

#[async_trait]
impl FrameSource for ChannelFrameSource {
    async fn next_frame(&mut self) -> Option<RawFrame> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::capture::PixelFormat;

    #[tokio::test]
    async fn test_channel_source_drains_then_ends() {
        let (tx, rx) = mpsc::channel(4);
        let mut source = ChannelFrameSource::new(rx);

        tx.send(RawFrame::new(1, 2, 2, vec![0; 16], PixelFormat::RGBA8))
            .await
            .unwrap();
        tx.send(RawFrame::new(2, 2, 2, vec![0; 16], PixelFormat::RGBA8))
            .await
            .unwrap();
        drop(tx);

        assert_eq!(source.next_frame().await.unwrap().timestamp, 1);
        assert_eq!(source.next_frame().await.unwrap().timestamp, 2);
        assert!(source.next_frame().await.is_none());
    }
}
