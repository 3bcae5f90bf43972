use std::time::{Duration, Instant};

/// How long a row shows "Copied!" after being copied.
pub const FLASH_DURATION: Duration = Duration::from_secs(2);

/// Transient per-row "just copied" indicator.
///
/// `Idle -> JustCopied` on copy, back to `Idle` once the deadline passes or
/// the owning section is torn down, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFlash {
    #[default]
    Idle,
    JustCopied {
        until: Instant,
    },
}

impl CopyFlash {
    /// Start (or restart) the flash.
    pub fn trigger(&mut self, now: Instant) {
        *self = CopyFlash::JustCopied {
            until: now + FLASH_DURATION,
        };
    }

    /// Expire the flash if its deadline passed. Returns true on transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        match *self {
            CopyFlash::JustCopied { until } if now >= until => {
                *self = CopyFlash::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        *self = CopyFlash::Idle;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        matches!(*self, CopyFlash::JustCopied { until } if now < until)
    }
}
