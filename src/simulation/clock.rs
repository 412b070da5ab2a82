/// Monotonic seconds since the scene was mounted.
pub struct FrameClock {
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
}

impl FrameClock {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn start() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    // std::time::Instant is unavailable on wasm32-unknown-unknown
    #[cfg(target_arch = "wasm32")]
    pub fn start() -> Self {
        Self { start_ms: now_ms() }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn elapsed(&self) -> f32 {
        ((now_ms() - self.start_ms).max(0.0) / 1000.0) as f32
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let clock = FrameClock::start();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
