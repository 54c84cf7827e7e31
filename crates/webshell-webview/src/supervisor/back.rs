use tracing::debug;

use crate::events::BackOutcome;

use super::{Deferred, Phase, Supervisor};

impl Supervisor {
    /// Resolve the system back gesture.
    pub fn on_back_requested(&mut self) -> BackOutcome {
        if self.destroyed {
            return BackOutcome::DeferToSystem;
        }
        match self.phase {
            Phase::Loading => {
                debug!("back during load: aborting");
                self.host.renderer.stop_loading();
                self.disarm(Deferred::PageTimeout);
                self.phase = Phase::Idle;
                self.go_back_or_defer()
            }
            Phase::TimedOut => {
                debug!("back after timeout: reloading current entry");
                self.host.renderer.reload();
                self.begin_load();
                BackOutcome::Handled
            }
            _ => self.go_back_or_defer(),
        }
    }

    fn go_back_or_defer(&mut self) -> BackOutcome {
        if self.host.renderer.can_go_back() {
            self.host.renderer.go_back();
            BackOutcome::Handled
        } else {
            BackOutcome::DeferToSystem
        }
    }
}
