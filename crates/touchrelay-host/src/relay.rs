//! Attach/detach lifecycle and raw input interception.

use serde_json::json;
use touchrelay_dom::Document;
use touchrelay_protocol::{Checkpoint, Instrumentation};
use touchrelay_zones::{partition, partition_one, ZoneRef};
use tracing::{debug, info, warn};

use crate::input::{Disposition, RawInput};
use crate::options::HostRelayOptions;
use crate::overlay::Overlay;

/// State that exists only while attached.
pub(crate) struct Attachment {
    pub(crate) zones: Vec<ZoneRef>,
    pub(crate) options: HostRelayOptions,
    pub(crate) marks: Instrumentation,
    pub(crate) overlay: Overlay,
}

/// Relay context for one host page.
///
/// Holds the zone registry and options for the duration of an attachment.
/// Nothing is global: independent relays can coexist in one process.
#[derive(Default)]
pub struct HostRelay {
    attachment: Option<Attachment>,
}

impl HostRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the capture overlay on `page` and start routing to `zones`.
    ///
    /// If this relay is already attached, or the page already carries an
    /// overlay with the configured id, this is a no-op: the existing
    /// registry, options and overlay stay in effect. Returns whether a new
    /// attachment was made.
    pub fn attach<D: Document>(
        &mut self,
        page: &mut D,
        zones: Vec<ZoneRef>,
        options: HostRelayOptions,
    ) -> bool {
        if self.attachment.is_some() {
            debug!("relay already attached; keeping existing zones");
            return false;
        }
        if page.element_by_id(&options.overlay_id).is_some() {
            debug!(overlay_id = %options.overlay_id, "overlay already attached; keeping existing zones");
            return false;
        }

        let overlay = Overlay::install(page, &options.overlay_id, options.overlay_z_index);
        let marks = Instrumentation::new(options.debug, options.marks.clone());
        info!(
            zones = zones.len(),
            debug = options.debug,
            overlay = %overlay.element(),
            "touch relay attached to page"
        );
        self.attachment = Some(Attachment {
            zones,
            options,
            marks,
            overlay,
        });
        true
    }

    /// Remove the overlay and forget the registry. No-op when not attached.
    pub fn detach<D: Document>(&mut self, page: &mut D) {
        let Some(attachment) = self.attachment.take() else {
            return;
        };
        attachment.overlay.remove(page);
        info!("touch relay detached from page");
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.attachment.as_ref().map(|a| &a.overlay)
    }

    /// Registered zones, in registry order. Empty when detached.
    pub fn zones(&self) -> &[ZoneRef] {
        self.attachment
            .as_ref()
            .map(|a| a.zones.as_slice())
            .unwrap_or(&[])
    }

    pub fn options(&self) -> Option<&HostRelayOptions> {
        self.attachment.as_ref().map(|a| &a.options)
    }

    /// Route one raw event captured on the overlay.
    pub fn handle_raw<D: Document>(&self, page: &mut D, input: &RawInput) -> Disposition {
        let Some(attachment) = &self.attachment else {
            return Disposition::Ignored;
        };
        let kind = input.kind();
        if !attachment.overlay.listens_to(kind) {
            return Disposition::Ignored;
        }
        if !input.is_well_formed() {
            warn!(kind = %kind, "raw input shape does not match its kind; ignored");
            return Disposition::Ignored;
        }

        attachment
            .marks
            .mark(Checkpoint::Intercepted, format!("intercept-{kind}"), || {
                json!({ "kind": kind })
            });

        let buckets = match input {
            RawInput::Touches { changed, .. } => partition(changed, &attachment.zones),
            RawInput::Single { point, .. } => partition_one(point, &attachment.zones),
        };
        let summary = attachment.dispatch(page, kind, &buckets);

        Disposition::Relayed {
            prevent_default: kind.prevents_default(),
            summary,
        }
    }
}
