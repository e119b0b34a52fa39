//! Interruption handler.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use swarm_core::prelude::Quota;

/// Creates interruption quota which is reached once the user presses Ctrl-C.
pub fn create_interruption_quota() -> Arc<dyn Quota> {
    let should_interrupt = Arc::new(AtomicBool::new(false));

    ctrlc::set_handler({
        let should_interrupt = should_interrupt.clone();
        move || {
            should_interrupt.store(true, Ordering::Relaxed);
        }
    })
    .expect("cannot set interruption handler");

    Arc::new(InterruptionQuota { should_interrupt })
}

struct InterruptionQuota {
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.should_interrupt.load(Ordering::Relaxed)
    }
}
