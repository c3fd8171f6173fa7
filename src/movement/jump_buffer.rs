//! Movement domain: single-slot jump input buffer.

/// Remembers one early jump press until it is consumed or expires.
///
/// Times are seconds of virtual time. Registering again overwrites the
/// pending request instead of queueing a second jump. Expiry is checked
/// lazily when consumption is attempted, so no timer needs ticking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpBuffer {
    expiry: Option<f64>,
}

impl JumpBuffer {
    /// Record a jump request valid until `now + buffer_time`.
    pub fn register(&mut self, now: f64, buffer_time: f32) {
        self.expiry = Some(now + f64::from(buffer_time.max(0.0)));
    }

    /// Returns true and clears the request iff it has not expired yet.
    /// An expired request is cleared as well.
    pub fn try_consume(&mut self, now: f64) -> bool {
        matches!(self.expiry.take(), Some(expiry) if now < expiry)
    }

    pub fn clear(&mut self) {
        self.expiry = None;
    }

    /// Whether a request is stored, expired or not.
    pub fn is_pending(&self) -> bool {
        self.expiry.is_some()
    }

    pub fn expiry(&self) -> Option<f64> {
        self.expiry
    }

    /// Seconds left before the pending request expires, 0 when none.
    pub fn remaining(&self, now: f64) -> f32 {
        self.expiry
            .map(|expiry| (expiry - now).max(0.0) as f32)
            .unwrap_or(0.0)
    }
}
