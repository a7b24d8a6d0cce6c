//! Pin the benchmarking thread to one core while a timed loop runs.
//!
//! Only Linux gets real pinning (through libc). Elsewhere the guard does
//! nothing and timings may include core migrations.

#[cfg(target_os = "linux")]
mod platform {
    use std::mem::{size_of, zeroed};

    pub type Affinity = libc::cpu_set_t;

    /// Current affinity mask of the calling thread.
    pub fn current() -> Option<Affinity> {
        // SAFETY: cpu_set_t is plain data; the size passed matches the buffer.
        unsafe {
            let mut set: libc::cpu_set_t = zeroed();
            (libc::sched_getaffinity(0, size_of::<libc::cpu_set_t>(), &mut set) == 0).then_some(set)
        }
    }

    /// Core the calling thread is running on right now.
    pub fn current_cpu() -> Option<usize> {
        // SAFETY: no arguments, no memory access.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn pin(core: usize) -> bool {
        // SAFETY: cpu_set_t is plain data; CPU_SET bounds-checks `core`.
        unsafe {
            let mut set: libc::cpu_set_t = zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(set: &Affinity) -> bool {
        // SAFETY: `set` came from sched_getaffinity.
        unsafe { libc::sched_setaffinity(0, size_of::<libc::cpu_set_t>(), set) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Affinity = ();

    pub fn current() -> Option<Affinity> {
        None
    }

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn restore(_set: &Affinity) -> bool {
        true
    }
}

/// RAII guard: pins to the current core on creation, restores the previous
/// affinity on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new();
///     // ... timed loop ...
/// } // original affinity restored here
/// ```
pub struct CpuPinGuard {
    saved: Option<platform::Affinity>,
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let saved = platform::current();
        let pinned_core = match (saved.as_ref(), platform::current_cpu()) {
            (Some(_), Some(core)) if platform::pin(core) => Some(core),
            _ => None,
        };
        if pinned_core.is_none() {
            log::debug!("CPU pinning unavailable, timings may include core migrations");
        }
        Self { saved, pinned_core }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn pinned_core(&self) -> Option<usize> {
        self.pinned_core
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_none() {
            return;
        }
        if let Some(saved) = self.saved.take() {
            if !platform::restore(&saved) {
                log::warn!("failed to restore CPU affinity after benchmark");
            }
        }
    }
}
