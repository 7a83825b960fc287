//! Receiver lifecycle and message handling.

use serde_json::json;
use tokio::time::{sleep_until, Instant};
use touchrelay_dom::{Document, ElementId, SyntheticEvent};
use touchrelay_protocol::{epoch_millis, Checkpoint, Instrumentation, RelayEvent, RelayInbox, RelayMessage};
use tracing::{debug, info, trace, warn};

use crate::markers::MarkerBoard;
use crate::options::ReceiverOptions;
use crate::resolve::resolve_target;

/// What happened to one incoming payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reception {
    /// The receiver is not attached.
    NotListening,
    /// Not relay traffic, or an unrecognized tag; dropped without complaint.
    Ignored,
    /// Known tag but unusable payload; dropped with a warning.
    Rejected,
    /// Events were dispatched on `target`.
    Dispatched { target: ElementId, events: usize },
}

struct Listening {
    options: ReceiverOptions,
    marks: Instrumentation,
    markers: MarkerBoard,
}

/// Relay context for one zone document.
#[derive(Default)]
pub struct ZoneReceiver {
    listening: Option<Listening>,
}

impl ZoneReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start accepting relay messages. Works with or without zones of its
    /// own. A second attach keeps the first one's options; returns whether
    /// this call attached.
    pub fn attach(&mut self, options: ReceiverOptions) -> bool {
        if self.listening.is_some() {
            debug!("receiver already attached");
            return false;
        }
        let marks = Instrumentation::new(options.debug, options.marks.clone());
        info!(debug = options.debug, "touch relay receiver attached");
        self.listening = Some(Listening {
            options,
            marks,
            markers: MarkerBoard::new(),
        });
        true
    }

    /// Stop accepting messages and take any pending markers off `doc`.
    /// No-op when not attached.
    pub fn detach<D: Document + ?Sized>(&mut self, doc: &mut D) {
        let Some(mut listening) = self.listening.take() else {
            return;
        };
        listening.markers.clear(doc);
        info!("touch relay receiver detached");
    }

    pub fn is_attached(&self) -> bool {
        self.listening.is_some()
    }

    pub fn options(&self) -> Option<&ReceiverOptions> {
        self.listening.as_ref().map(|l| &l.options)
    }

    /// Handle one serialized relay message.
    pub fn handle_message<D: Document + ?Sized>(&mut self, doc: &mut D, raw: &str) -> Reception {
        self.handle_message_at(doc, raw, Instant::now())
    }

    /// [`Self::handle_message`] with an explicit clock reading for marker deadlines.
    pub fn handle_message_at<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        raw: &str,
        now: Instant,
    ) -> Reception {
        let Some(listening) = self.listening.as_mut() else {
            return Reception::NotListening;
        };

        listening.marks.mark(Checkpoint::Received, "receive-event", || {
            serde_json::from_str::<serde_json::Value>(raw).unwrap_or_else(|_| json!(raw))
        });

        let Some(kind) = RelayMessage::peek_kind(raw) else {
            trace!(payload = raw, "unrecognized relay tag ignored");
            return Reception::Ignored;
        };

        let decoded = RelayMessage::from_json(raw).and_then(|msg| msg.decode());
        match decoded {
            Ok(Some(event)) => listening.deliver(doc, event, now),
            Ok(None) => Reception::Ignored,
            Err(e) => {
                warn!(kind = %kind, error = %e, "malformed relay message dropped");
                Reception::Rejected
            }
        }
    }

    /// Remove markers whose deadline has passed.
    pub fn sweep_markers<D: Document + ?Sized>(&mut self, doc: &mut D, now: Instant) -> usize {
        self.listening
            .as_mut()
            .map_or(0, |l| l.markers.sweep(doc, now))
    }

    pub fn next_marker_deadline(&self) -> Option<Instant> {
        self.listening
            .as_ref()
            .and_then(|l| l.markers.next_deadline())
    }

    pub fn live_markers(&self) -> usize {
        self.listening.as_ref().map_or(0, |l| l.markers.len())
    }

    /// Handle everything already queued on `inbox`, in arrival order.
    pub fn pump<D: Document + ?Sized>(&mut self, doc: &mut D, inbox: &mut RelayInbox) -> usize {
        let mut handled = 0;
        while let Some(raw) = inbox.try_recv() {
            self.handle_message(doc, &raw);
            handled += 1;
        }
        handled
    }

    /// Drive the receiver until every port into `inbox` is gone, expiring
    /// markers on time. Pending markers are still removed at their deadline
    /// after the inbox closes.
    pub async fn run<D: Document + ?Sized>(&mut self, doc: &mut D, inbox: &mut RelayInbox) {
        loop {
            let deadline = self.next_marker_deadline();
            tokio::select! {
                raw = inbox.recv() => match raw {
                    Some(raw) => {
                        self.handle_message(doc, &raw);
                    }
                    None => break,
                },
                _ = wait_for(deadline) => {
                    self.sweep_markers(doc, Instant::now());
                }
            }
        }

        while let Some(deadline) = self.next_marker_deadline() {
            sleep_until(deadline).await;
            self.sweep_markers(doc, Instant::now());
        }
        debug!("relay inbox closed");
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

impl Listening {
    fn deliver<D: Document + ?Sized>(&mut self, doc: &mut D, event: RelayEvent, now: Instant) -> Reception {
        let kind = event.kind();
        let class = self.options.marker_class.as_str();

        let mut resolved = Vec::new();
        for (position, identifier) in event.points() {
            let target = resolve_target(doc, position, class);
            if self.options.debug {
                self.markers
                    .draw(doc, position, identifier, &self.options, now);
            }
            resolved.push((position, identifier, target));
        }

        let target = resolved
            .first()
            .map_or_else(|| doc.root(), |(_, _, target)| *target);
        let events = SyntheticEvent::from_points(kind, &resolved);
        let count = events.len();

        for synthetic in events {
            self.marks.mark(Checkpoint::Dispatched, "dispatch-event", || {
                json!({ "eventName": kind, "identifiers": synthetic.identifiers(), "target": target })
            });
            doc.dispatch_event(target, synthetic);
        }

        if let Some(sent) = event.time().filter(|_| self.marks.is_enabled()) {
            debug!(kind = %kind, latency_ms = epoch_millis() - sent, "relay latency");
        }
        debug!(kind = %kind, %target, points = resolved.len(), "relayed event dispatched");

        Reception::Dispatched {
            target,
            events: count,
        }
    }
}

#[cfg(test)]
mod tests;
