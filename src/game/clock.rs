//! Frame Clock
//!
//! `std::time::Instant` panics in the browser, so wasm builds read
//! `performance.now()` behind the same interface.

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub use web::Instant;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::time::Duration;

    /// Milliseconds since page load.
    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    pub struct Instant(f64);

    impl Instant {
        pub fn now() -> Self {
            let millis = web_sys::window()
                .and_then(|w| w.performance())
                .map_or(0.0, |p| p.now());
            Self(millis)
        }

        pub fn duration_since(&self, earlier: Instant) -> Duration {
            Duration::from_secs_f64(((self.0 - earlier.0) / 1000.0).max(0.0))
        }

        pub fn elapsed(&self) -> Duration {
            Self::now().duration_since(*self)
        }
    }
}
