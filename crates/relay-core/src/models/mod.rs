pub mod analytics_event;
pub mod backend_event;
pub mod commerce;
pub mod consent;
pub mod reporting;
pub mod user;

pub use analytics_event::{AnalyticsEvent, EventType};
pub use backend_event::BackendEvent;
pub use commerce::{CommerceEvent, Product, ProductAction, TransactionAttributes};
pub use consent::{ConsentPurpose, ConsentSettings, ConsentState, ConsentStatus, ConsentType};
pub use reporting::{MessageType, ReportingMessage};
pub use user::{AttributeValue, IdentityKind, UserIdField};
