//! Panel lifecycle and the view message loop.

use std::collections::VecDeque;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::explorer::Explorer;
use crate::message::{HostMessage, InboundCommand, LifecycleEvent, OutboundMessage};

/// Where the panel is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Uninitialized,
    Loading,
    Ready,
}

/// Input to the controller loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// The panel was opened. Triggers the initial load.
    Created,
    /// The panel came back into view. Reloads only after a `Hidden`; a
    /// panel that was never hidden is already current.
    Visible,
    Hidden,
    Command(InboundCommand),
    /// Ends the loop and cancels whatever is in flight.
    Dispose,
}

impl From<HostMessage> for PanelEvent {
    fn from(message: HostMessage) -> Self {
        match message {
            HostMessage::Lifecycle(LifecycleEvent::Visible) => PanelEvent::Visible,
            HostMessage::Lifecycle(LifecycleEvent::Hidden) => PanelEvent::Hidden,
            HostMessage::Lifecycle(LifecycleEvent::Dispose) => PanelEvent::Dispose,
            HostMessage::Command(command) => PanelEvent::Command(command),
        }
    }
}

/// Drives one panel: loads data, answers view commands, pushes
/// notifications.
///
/// Notifications go out on an unbounded channel and are never awaited. If
/// the receiving side is gone they are logged and dropped.
pub struct PanelController {
    explorer: Explorer,
    outbound: UnboundedSender<OutboundMessage>,
    state: PanelState,
    current_object: Option<String>,
    hidden: bool,
}

impl PanelController {
    pub fn new(explorer: Explorer, outbound: UnboundedSender<OutboundMessage>) -> Self {
        Self {
            explorer,
            outbound,
            state: PanelState::Uninitialized,
            current_object: None,
            hidden: false,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn current_object(&self) -> Option<&str> {
        self.current_object.as_deref()
    }

    /// Run the panel until it is disposed or its events run out.
    ///
    /// The initial load starts immediately. Events are handled one at a
    /// time; events that arrive while one is in flight are queued, except
    /// `Dispose`, which drops the in-flight work and returns. When the event
    /// channel closes, the in-flight work and every queued event still run
    /// to completion before the loop ends.
    pub async fn run(mut self, mut events: UnboundedReceiver<PanelEvent>) {
        let mut pending = VecDeque::from([PanelEvent::Created]);
        let mut closed = false;

        loop {
            let event = match pending.pop_front() {
                Some(event) => event,
                None if closed => break,
                None => match events.recv().await {
                    Some(event) => event,
                    None => break,
                },
            };
            if event == PanelEvent::Dispose {
                break;
            }

            let work = self.handle_event(event);
            tokio::pin!(work);

            loop {
                tokio::select! {
                    () = &mut work => break,
                    next = events.recv(), if !closed => match next {
                        Some(PanelEvent::Dispose) => {
                            info!("Panel disposed, cancelling in-flight work");
                            return;
                        }
                        Some(other) => pending.push_back(other),
                        None => {
                            debug!(queued = pending.len(), "Event channel closed, draining");
                            closed = true;
                        }
                    },
                }
            }
        }

        info!("Panel stopped");
    }

    /// Handle one event to completion.
    pub async fn handle_event(&mut self, event: PanelEvent) {
        debug!(?event, state = ?self.state, "Panel event");
        match event {
            PanelEvent::Created => self.load().await,
            PanelEvent::Visible => {
                if self.hidden {
                    self.hidden = false;
                    self.load().await;
                }
            }
            PanelEvent::Hidden => self.hidden = true,
            PanelEvent::Command(command) => self.handle_command(command).await,
            PanelEvent::Dispose => {}
        }
    }

    /// Fetch the object list and user/org names and push `loadObjects`.
    ///
    /// On failure the previous state is restored so the load can be retried.
    pub async fn load(&mut self) {
        let previous = self.state;
        self.state = PanelState::Loading;

        match self.explorer.load_panel().await {
            Ok((objects, info)) => {
                self.state = PanelState::Ready;
                info!(objects = objects.len(), "Panel ready");
                self.send(OutboundMessage::LoadObjects {
                    objects,
                    user_name: info.user_name,
                    org_name: info.org_name,
                    current_object: self.current_object.clone(),
                });
            }
            Err(e) => {
                self.state = previous;
                warn!(error = %e, "Panel load failed");
                self.send(OutboundMessage::Error {
                    message: format!("Error fetching objects: {e}"),
                });
            }
        }
    }

    pub async fn handle_command(&mut self, command: InboundCommand) {
        match command {
            InboundCommand::SelectObject { object_name } => {
                self.current_object = Some(object_name.clone());
                let message = match self.explorer.get_object_metadata(&object_name).await {
                    Ok(data) => OutboundMessage::DisplayMetadata { data },
                    Err(e) => OutboundMessage::Error {
                        message: format!("Error fetching metadata: {e}"),
                    },
                };
                self.send(message);
            }
            InboundCommand::RunQuery { query } => {
                let message = match self.explorer.run_query(&query).await {
                    Ok(data) => OutboundMessage::DisplaySoqlResults { data },
                    Err(e) => OutboundMessage::Error {
                        message: format!("Error running SOQL query: {e}"),
                    },
                };
                self.send(message);
            }
            InboundCommand::Reauthenticate => {
                info!("Re-authenticating");
                self.explorer.reset_session().await;
                self.load().await;
            }
        }
    }

    fn send(&self, message: OutboundMessage) {
        if self.outbound.send(message).is_err() {
            warn!("View channel closed, dropping notification");
        }
    }
}
