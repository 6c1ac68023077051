use relay_core::models::{CommerceEvent, MessageType, ReportingMessage};
use relay_core::traits::CommerceListener;

use crate::kit::FirebaseKit;

impl CommerceListener for FirebaseKit {
    fn log_commerce_event(&self, event: &CommerceEvent) -> Vec<ReportingMessage> {
        let Some(backend) = self.backend("log_commerce_event") else {
            return Vec::new();
        };

        let translation = self.translator().translate_with_notices(event);
        self.record().record_warnings(translation.warning_count());

        for backend_event in &translation.events {
            backend.log_event(&backend_event.name, &backend_event.payload);
        }
        self.record()
            .record_commerce_events(translation.events.len());

        translation
            .events
            .into_iter()
            .map(|backend_event| self.ack(MessageType::CommerceEvent, Some(backend_event.name)))
            .collect()
    }
}
