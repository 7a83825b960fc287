//! End-to-end replay: one host page, its zones, and a receiver per zone.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use touchrelay_common::{Rect, RelayError};
use touchrelay_config::TouchRelayConfig;
use touchrelay_dom::{DispatchRecord, Document, Scene};
use touchrelay_host::{Disposition, HostRelay, HostRelayOptions};
use touchrelay_protocol::RelayInbox;
use touchrelay_receiver::{ReceiverOptions, ZoneReceiver};
use touchrelay_zones::{FrameZone, ZoneRef, ZoneSurface};
use tracing::{debug, info, warn};

use crate::scenario::{InputStep, Scenario};

/// One zone's side of a replay.
struct ZoneContext {
    frame: Arc<FrameZone>,
    inbox: Option<RelayInbox>,
    receiver: ZoneReceiver,
    doc: Scene,
}

/// Everything dispatched during a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub host: Vec<DispatchRecord>,
    pub zones: Vec<ZoneReport>,
    /// Inputs the host relay intercepted.
    pub relayed_inputs: usize,
    /// Messages that could not be delivered.
    pub dropped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneReport {
    pub name: String,
    pub dispatched: Vec<DispatchRecord>,
    /// Debug markers still on the zone's page when the replay ended.
    pub markers_left: usize,
}

#[derive(Serialize)]
struct Line<'a> {
    context: &'a str,
    #[serde(flatten)]
    record: &'a DispatchRecord,
}

impl ReplayReport {
    /// One JSON object per dispatched event, host first, then each zone.
    pub fn to_json_lines(&self) -> Result<Vec<String>, serde_json::Error> {
        let host = self.host.iter().map(|record| ("host", record));
        let zones = self
            .zones
            .iter()
            .flat_map(|z| z.dispatched.iter().map(move |record| (z.name.as_str(), record)));
        host.chain(zones)
            .map(|(context, record)| serde_json::to_string(&Line { context, record }))
            .collect()
    }
}

/// Run `scenario` through a real host relay and real zone receivers.
pub fn replay(
    scenario: &Scenario,
    config: &TouchRelayConfig,
    debug: bool,
) -> Result<ReplayReport, RelayError> {
    let mut host_doc = Scene::new(scenario.viewport);
    for spec in &scenario.host_elements {
        host_doc.append(spec.clone());
    }

    let receiver_options = ReceiverOptions::from_config(&config.zone).with_debug(debug || config.zone.debug);
    let mut zones: Vec<ZoneContext> = scenario
        .zones
        .iter()
        .map(|spec| {
            let frame = Arc::new(FrameZone::new(spec.name.clone(), spec.rect));
            let inbox = spec.loaded.then(|| frame.load());
            let mut doc = Scene::new(Rect::new(0.0, 0.0, spec.rect.width, spec.rect.height));
            for element in &spec.elements {
                doc.append(element.clone());
            }
            let mut receiver = ZoneReceiver::new();
            receiver.attach(receiver_options.clone());
            ZoneContext {
                frame,
                inbox,
                receiver,
                doc,
            }
        })
        .collect();

    let registry: Vec<ZoneRef> = zones.iter().map(|z| z.frame.clone() as ZoneRef).collect();
    let host_options = HostRelayOptions::from_config(&config.host).with_debug(debug || config.host.debug);
    let mut relay = HostRelay::new();
    relay.attach(&mut host_doc, registry, host_options);

    let mut now = Instant::now();
    let mut relayed_inputs = 0;
    let mut dropped = 0;

    for (step_index, step) in scenario.inputs.iter().enumerate() {
        match step {
            InputStep::MoveZone { zone, rect } => {
                let ctx = zones.get(*zone).ok_or_else(|| {
                    RelayError::Other(format!("step {step_index}: no zone with index {zone}"))
                })?;
                ctx.frame.set_bounds(*rect);
                debug!(zone, ?rect, "zone moved");
            }
            InputStep::Wait { ms } => {
                now += Duration::from_millis(*ms);
                for ctx in &mut zones {
                    ctx.receiver.sweep_markers(&mut ctx.doc, now);
                }
            }
            _ => {
                let Some(input) = step.raw_input() else {
                    continue;
                };
                match relay.handle_raw(&mut host_doc, &input) {
                    Disposition::Relayed { summary, .. } => {
                        relayed_inputs += 1;
                        dropped += summary.dropped;
                    }
                    Disposition::Ignored => {
                        warn!(step = step_index, kind = %input.kind(), "input not intercepted");
                    }
                }
                for ctx in &mut zones {
                    let Some(inbox) = ctx.inbox.as_mut() else {
                        continue;
                    };
                    while let Some(raw) = inbox.try_recv() {
                        ctx.receiver.handle_message_at(&mut ctx.doc, &raw, now);
                    }
                }
            }
        }
    }

    relay.detach(&mut host_doc);
    let report = ReplayReport {
        host: host_doc.take_dispatched(),
        zones: zones
            .into_iter()
            .map(|mut ctx| ZoneReport {
                name: ctx.frame.name().to_string(),
                markers_left: ctx.receiver.live_markers(),
                dispatched: ctx.doc.take_dispatched(),
            })
            .collect(),
        relayed_inputs,
        dropped,
    };
    info!(
        inputs = scenario.inputs.len(),
        relayed = report.relayed_inputs,
        dropped = report.dropped,
        "replay finished"
    );
    Ok(report)
}
