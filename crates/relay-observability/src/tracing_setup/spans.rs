//! Span definitions per operation: commerce translation and identity forwarding.

/// Create a commerce translation span.
#[macro_export]
macro_rules! translation_span {
    ($action:expr) => {
        tracing::info_span!("relay.translation", action = %$action)
    };
}

/// Create an identity forwarding span.
#[macro_export]
macro_rules! identity_span {
    ($field:expr) => {
        tracing::info_span!("relay.identity", field = %$field)
    };
}
