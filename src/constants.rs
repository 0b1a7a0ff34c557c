/// Frontend timing and threshold constants.
///
/// These express intended behavior (fade lengths, debounce windows, scroll
/// thresholds) and keep magic numbers out of the wiring code.
// Lightbox image swap fade (matches the CSS transition length)
pub const LIGHTBOX_FADE_MS: i32 = 150;

// Heart burst lifetime on a like toggle
pub const HEART_BURST_MS: i32 = 600;

// Scroll-settle debounce before re-measuring the page height
pub const SCROLL_SETTLE_MS: i32 = 100;

// Contact form status banner reset delay
pub const FORM_RESET_MS: i32 = 5000;

// Header gains its "scrolled" state past this scroll offset (px)
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

// Reveal-on-scroll margins
pub const REVEAL_MARGIN_PX: f64 = 100.0; // .animate-fadeIn elements
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.9; // gallery/video items

// About-section slideshow cycle
pub const SLIDESHOW_INTERVAL_MS: i32 = 24_000;
pub const SLIDESHOW_SLIDE_COUNT: usize = 3;
