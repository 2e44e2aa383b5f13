//! Scroll and pointer model of the single page viewport.
//!
//! The renderer reports what it laid out each frame through [`Viewport::observe`]
//! and applies any [`ScrollRequest`] it takes back out. Pointer tracking is a
//! [`PointerTracker`] value owned by whichever view subscribes to it, so the
//! subscription ends when that view's state is dropped.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    offset: f32,
    content_height: f32,
    visible_height: f32,
    size: (f32, f32),
    pending: Option<ScrollRequest>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.offset
    }

    pub fn size(&self) -> (f32, f32) {
        self.size
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.visible_height).max(0.0)
    }

    /// Records the state the renderer produced for the current frame.
    pub fn observe(&mut self, offset: f32, content_height: f32, visible_height: f32) {
        self.content_height = content_height.max(0.0);
        self.visible_height = visible_height.max(0.0);
        if self.pending.is_none() {
            self.offset = offset.max(0.0);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = (width.max(0.0), height.max(0.0));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0.0;
        self.pending = Some(ScrollRequest::Top);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.pending = Some(ScrollRequest::Bottom);
    }

    pub fn pending_request(&self) -> Option<ScrollRequest> {
        self.pending
    }

    /// Resolves the pending request into an absolute offset for the renderer.
    pub fn take_request(&mut self) -> Option<f32> {
        let request = self.pending.take()?;
        Some(match request {
            ScrollRequest::Top => 0.0,
            ScrollRequest::Bottom => self.max_offset(),
        })
    }
}

/// Maps a pointer position to the hero parallax offset, in `[-10, 10]` on
/// both axes.
pub fn parallax_offset(pointer: (f32, f32), size: (f32, f32)) -> (f32, f32) {
    let axis = |position: f32, extent: f32| {
        if extent <= 0.0 {
            return 0.0;
        }
        ((position / extent).clamp(0.0, 1.0) * 20.0) - 10.0
    };
    (axis(pointer.0, size.0), axis(pointer.1, size.1))
}

/// Pointer subscription held by a view while it is active.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    offset: (f32, f32),
}

impl PointerTracker {
    pub fn subscribe() -> Self {
        tracing::debug!("pointer tracking subscribed");
        Self::default()
    }

    pub fn track(&mut self, pointer: (f32, f32), viewport: &Viewport) {
        self.offset = parallax_offset(pointer, viewport.size());
    }

    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        tracing::debug!("pointer tracking unsubscribed");
    }
}
