//! Wall-clock timing for perf stats: `js_sys::Date` in the browser,
//! `Instant` everywhere else.

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Run one stage; when `enabled`, also report how long it took.
    #[inline]
    pub(crate) fn stage<R>(enabled: bool, stage: impl FnOnce() -> R) -> (R, f64) {
        if !enabled {
            return (stage(), 0.0);
        }
        let timer = PerfTimer::start();
        let out = stage();
        (out, timer.elapsed_ms())
    }
}
