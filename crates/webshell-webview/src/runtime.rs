//! Async driver that owns a [`Supervisor`] and serialises everything into it.
//!
//! Host callbacks and fired timers arrive on separate channels; `run` selects
//! over both so the supervisor only ever sees one event at a time. The
//! runtime is `!Send` (the host capabilities are UI-thread objects): await
//! `run` directly or put it on a `LocalSet`.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use webshell_common::ShellError;

use crate::events::{EventOutcome, ShellEvent};
use crate::host::TimerToken;
use crate::state::StateBundle;
use crate::supervisor::Supervisor;

enum Command {
    Dispatch {
        event: ShellEvent,
        reply: Option<oneshot::Sender<EventOutcome>>,
    },
    SaveState(oneshot::Sender<StateBundle>),
    Shutdown,
}

/// Cloneable sender side of a [`ShellRuntime`].
#[derive(Debug, Clone)]
pub struct ShellHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl ShellHandle {
    /// Fire-and-forget dispatch.
    pub fn send(&self, event: ShellEvent) -> Result<(), ShellError> {
        self.push(Command::Dispatch { event, reply: None })
    }

    /// Dispatch and wait for the supervisor's answer. Use this for
    /// navigation, back, and file-chooser events.
    pub async fn request(&self, event: ShellEvent) -> Result<EventOutcome, ShellError> {
        let (reply, rx) = oneshot::channel();
        self.push(Command::Dispatch {
            event,
            reply: Some(reply),
        })?;
        rx.await.map_err(|_| ShellError::RuntimeClosed)
    }

    pub async fn save_state(&self) -> Result<StateBundle, ShellError> {
        let (reply, rx) = oneshot::channel();
        self.push(Command::SaveState(reply))?;
        rx.await.map_err(|_| ShellError::RuntimeClosed)
    }

    /// Ask the runtime to destroy the supervisor and return.
    pub fn shutdown(&self) {
        let _ = self.commands.send(Command::Shutdown);
    }

    fn push(&self, command: Command) -> Result<(), ShellError> {
        self.commands
            .send(command)
            .map_err(|_| ShellError::RuntimeClosed)
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dispatch { event, .. } => write!(f, "Dispatch({})", event.name()),
            Self::SaveState(_) => f.write_str("SaveState"),
            Self::Shutdown => f.write_str("Shutdown"),
        }
    }
}

pub struct ShellRuntime {
    supervisor: Supervisor,
    commands: mpsc::UnboundedReceiver<Command>,
    timers: mpsc::UnboundedReceiver<TimerToken>,
}

impl ShellRuntime {
    /// `timers` is the receiver paired with the supervisor's scheduler,
    /// usually from [`TokioScheduler::new`](crate::scheduler::TokioScheduler::new).
    pub fn new(
        supervisor: Supervisor,
        timers: mpsc::UnboundedReceiver<TimerToken>,
    ) -> (Self, ShellHandle) {
        let (tx, commands) = mpsc::unbounded_channel();
        let runtime = Self {
            supervisor,
            commands,
            timers,
        };
        (runtime, ShellHandle { commands: tx })
    }

    pub fn supervisor(&self) -> &Supervisor {
        &self.supervisor
    }

    /// Start the supervisor, then process commands and timers until
    /// [`ShellHandle::shutdown`] or every handle is dropped. The supervisor
    /// is destroyed before it is handed back.
    pub async fn run(mut self, saved: Option<StateBundle>) -> Supervisor {
        self.supervisor.start(saved.as_ref());
        info!(url = %self.supervisor.target_url(), "shell runtime started");

        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Dispatch { event, reply }) => {
                        let outcome = self.supervisor.handle(event);
                        if let Some(reply) = reply {
                            let _ = reply.send(outcome);
                        }
                    }
                    Some(Command::SaveState(reply)) => {
                        let mut bundle = StateBundle::new();
                        self.supervisor.on_save_state(&mut bundle);
                        let _ = reply.send(bundle);
                    }
                    Some(Command::Shutdown) => {
                        debug!("shutdown requested");
                        break;
                    }
                    None => {
                        debug!("all shell handles dropped");
                        break;
                    }
                },
                Some(token) = self.timers.recv() => {
                    self.supervisor.handle(ShellEvent::TimerFired(token));
                }
            }
        }

        self.supervisor.on_destroy();
        info!("shell runtime stopped");
        self.supervisor
    }
}

impl std::fmt::Debug for ShellRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellRuntime")
            .field("supervisor", &self.supervisor)
            .finish_non_exhaustive()
    }
}
