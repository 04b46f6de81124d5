//! Monotonic time source

/// Monotonic millisecond clock
///
/// Values never decrease over the life of the process. The origin is
/// arbitrary (typically boot); only differences are meaningful.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
