use std::path::Path;
use std::sync::Arc;

use relay_commerce::CommerceEventTranslator;
use relay_core::constants::KIT_NAME;
use relay_core::models::{ConsentState, MessageType, ReportingMessage};
use relay_core::payload::{Payload, PayloadBuilder};
use relay_core::traits::{BackendClient, ForegroundContext, HostSettings, HostUser};
use relay_core::{RelayConfig, RelayResult};
use relay_observability::{events, ForwardingMetrics, MetricsSnapshot};
use relay_sanitize::NameValueSanitizer;

/// Forwards host analytics traffic to the backend.
pub struct FirebaseKit {
    config: RelayConfig,
    settings: Box<dyn HostSettings>,
    backend: Option<Arc<dyn BackendClient>>,
    foreground: Option<Arc<dyn ForegroundContext>>,
    sanitizer: NameValueSanitizer,
    translator: CommerceEventTranslator,
    metrics: ForwardingMetrics,
}

impl FirebaseKit {
    /// Build a kit from resolved configuration and the host's kit settings.
    /// Capabilities are attached with [`with_backend`](Self::with_backend)
    /// and [`with_foreground_context`](Self::with_foreground_context).
    pub fn new(config: RelayConfig, settings: impl HostSettings + 'static) -> Self {
        let sanitizer = NameValueSanitizer::new(config.sanitization.clone());
        let translator = CommerceEventTranslator::new(config.commerce.clone(), sanitizer.clone());
        Self {
            config,
            settings: Box::new(settings),
            backend: None,
            foreground: None,
            sanitizer,
            translator,
            metrics: ForwardingMetrics::new(),
        }
    }

    /// Resolve configuration (env > file > defaults) and build a kit.
    pub fn load(config_path: Option<&Path>, settings: impl HostSettings + 'static) -> RelayResult<Self> {
        let config = RelayConfig::load(config_path)?;
        Ok(Self::new(config, settings))
    }

    pub fn with_backend(mut self, backend: Arc<dyn BackendClient>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_foreground_context(mut self, context: Arc<dyn ForegroundContext>) -> Self {
        self.foreground = Some(context);
        self
    }

    pub fn name(&self) -> &'static str {
        KIT_NAME
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn sanitizer(&self) -> &NameValueSanitizer {
        &self.sanitizer
    }

    pub fn translator(&self) -> &CommerceEventTranslator {
        &self.translator
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Called once the host has created the kit. Forwards the current
    /// user's consent, if the host has any.
    pub fn on_kit_started(&self, current_user: Option<&dyn HostUser>) {
        tracing::info!(
            kit = KIT_NAME,
            "kit started; forwarding requires a configured backend analytics instance"
        );
        let consent: Option<ConsentState> = current_user.and_then(|user| user.consent_state());
        if let Some(consent) = consent {
            self.forward_consent(&consent);
        }
    }

    pub(crate) fn settings(&self) -> &dyn HostSettings {
        self.settings.as_ref()
    }

    pub(crate) fn setting(&self, key: &str) -> Option<String> {
        self.settings.get(key)
    }

    pub(crate) fn record(&self) -> &ForwardingMetrics {
        &self.metrics
    }

    /// The backend client, or `None` (logged and counted as skipped) when
    /// the host has not supplied one.
    pub(crate) fn backend(&self, operation: &str) -> Option<&dyn BackendClient> {
        match &self.backend {
            Some(backend) => Some(backend.as_ref()),
            None => {
                events::capability_unavailable(operation, "backend_client");
                self.metrics.record_skipped();
                None
            }
        }
    }

    pub(crate) fn has_foreground(&self, operation: &str) -> bool {
        let active = self
            .foreground
            .as_ref()
            .and_then(|context| context.current_activity())
            .is_some();
        if !active {
            events::capability_unavailable(operation, "foreground_context");
            self.metrics.record_skipped();
        }
        active
    }

    /// Standardize an attribute map (event context) into a string payload.
    pub(crate) fn attribute_payload<'a, I>(&self, attributes: I) -> Payload
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        self.sanitizer
            .standardize_attributes(attributes, true)
            .into_iter()
            .fold(PayloadBuilder::new(), |builder, (key, value)| {
                builder.put_string(&key, Some(value.as_str()))
            })
            .build()
    }

    pub(crate) fn ack(&self, message_type: MessageType, event_name: Option<String>) -> ReportingMessage {
        ReportingMessage::new(KIT_NAME, message_type, event_name)
    }
}

impl std::fmt::Debug for FirebaseKit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseKit")
            .field("config", &self.config)
            .field("has_backend", &self.backend.is_some())
            .field("has_foreground", &self.foreground.is_some())
            .finish()
    }
}
