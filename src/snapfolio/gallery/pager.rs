pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 500;

/// Scroll geometry reported by the presentation layer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub viewport_height: u32,
    pub scroll_top: u32,
    pub content_height: u32,
}

impl ScrollMetrics {
    pub fn new(viewport_height: u32, scroll_top: u32, content_height: u32) -> Self {
        Self {
            viewport_height,
            scroll_top,
            content_height,
        }
    }

    /// True once the unscrolled distance to the bottom drops within `threshold`.
    pub fn near_bottom(&self, threshold: u32) -> bool {
        let seen = u64::from(self.viewport_height) + u64::from(self.scroll_top);
        seen >= u64::from(self.content_height.saturating_sub(threshold))
    }
}

/// Infinite-scroll cursor: exposes a growing prefix of the filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    threshold: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// A page size of zero is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn visible_count(&self, len: usize) -> usize {
        self.page.saturating_mul(self.page_size).min(len)
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count(items.len())]
    }

    pub fn has_more(&self, len: usize) -> bool {
        self.visible_count(len) < len
    }

    /// Moves to the next page while items remain hidden. Returns whether it moved.
    pub fn advance(&mut self, len: usize) -> bool {
        if !self.has_more(len) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Scroll trigger: advances when the viewport is near the bottom.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, len: usize) -> bool {
        metrics.near_bottom(self.threshold) && self.advance(len)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}
