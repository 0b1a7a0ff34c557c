// Lightbox state machine: an ordered, fixed set of image sources and a
// current index. Navigation wraps at both ends; every operation is a no-op
// on an empty collection so the DOM glue never has to guard.

pub struct Lightbox {
    images: Vec<String>,
    current: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            current: 0,
            open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_src(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Open at `index`. Returns the source to display, or `None` when the
    /// index is out of range (collection may be empty).
    pub fn open(&mut self, index: usize) -> Option<&str> {
        if index >= self.images.len() {
            return None;
        }
        self.current = index;
        self.open = true;
        self.current_src()
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance with wraparound; only meaningful while open.
    pub fn next(&mut self) -> Option<&str> {
        if !self.open || self.images.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.images.len();
        self.current_src()
    }

    /// Step back with wraparound; only meaningful while open.
    pub fn prev(&mut self) -> Option<&str> {
        if !self.open || self.images.is_empty() {
            return None;
        }
        let n = self.images.len();
        self.current = (self.current + n - 1) % n;
        self.current_src()
    }
}
