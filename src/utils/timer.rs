//! Monotonic wall-clock time in seconds.
//!
//! - Unix: `clock_gettime(CLOCK_MONOTONIC)` through libc.
//! - Windows: `QueryPerformanceCounter` / `QueryPerformanceFrequency`.
//! - Elsewhere: `std::time::Instant` measured from a process-wide anchor.

/// Time source for the bench runner.
pub trait Clock {
    /// Seconds since an arbitrary fixed point. Never decreases.
    fn now(&self) -> f64;
}

/// The platform clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now(&self) -> f64 {
        now_seconds()
    }
}

// ============================================================================
// Unix implementation using libc
// ============================================================================

#[cfg(unix)]
mod platform {
    pub fn now_seconds() -> f64 {
        // SAFETY: timespec is plain data, and `ts` is a valid out-pointer.
        let (rc, ts) = unsafe {
            let mut ts: libc::timespec = std::mem::zeroed();
            (libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts), ts)
        };
        if rc != 0 {
            return super::fallback::now_seconds();
        }
        ts.tv_sec as f64 + ts.tv_nsec as f64 / 1_000_000_000.0
    }
}

// ============================================================================
// Windows implementation
// ============================================================================

#[cfg(windows)]
mod platform {
    use std::sync::OnceLock;

    extern "system" {
        fn QueryPerformanceCounter(lpPerformanceCount: *mut i64) -> i32;
        fn QueryPerformanceFrequency(lpFrequency: *mut i64) -> i32;
    }

    static FREQUENCY: OnceLock<i64> = OnceLock::new();

    pub fn now_seconds() -> f64 {
        let freq = *FREQUENCY.get_or_init(|| {
            let mut freq = 0i64;
            // SAFETY: valid out-pointer; cannot fail on XP or later.
            unsafe { QueryPerformanceFrequency(&mut freq) };
            freq
        });
        if freq <= 0 {
            return super::fallback::now_seconds();
        }
        let mut count = 0i64;
        // SAFETY: valid out-pointer.
        unsafe { QueryPerformanceCounter(&mut count) };
        count as f64 / freq as f64
    }
}

#[cfg(not(any(unix, windows)))]
mod platform {
    pub fn now_seconds() -> f64 {
        super::fallback::now_seconds()
    }
}

#[allow(dead_code)]
mod fallback {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ANCHOR: OnceLock<Instant> = OnceLock::new();

    pub fn now_seconds() -> f64 {
        ANCHOR.get_or_init(Instant::now).elapsed().as_secs_f64()
    }
}

/// Current time in seconds.
#[inline(always)]
pub fn now_seconds() -> f64 {
    platform::now_seconds()
}
