//! Custom request extractors.

mod validated_payload;

pub use validated_payload::ValidatedPayload;
