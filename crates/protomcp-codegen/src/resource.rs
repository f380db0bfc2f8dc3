//! Resource message classification.
//!
//! A message is a resource when its `google.api.resource` option slot is
//! present and decodes to a `ResourceDescriptor`. Decoding happens in the
//! descriptor adapter; this predicate only asks whether a decoded value
//! exists. Field contents are never inspected.

use crate::descriptor::Descriptor;

/// Fully qualified name of the option extension read by the classifier.
pub const RESOURCE_EXTENSION: &str = "google.api.resource";

/// Fully qualified name of the message the extension must decode to.
pub const RESOURCE_DESCRIPTOR: &str = "google.api.ResourceDescriptor";

/// Returns `true` if `message` carries a well-formed resource annotation.
///
/// Absence of the annotation, or a decode failure inside the adapter,
/// yields `false`.
#[must_use]
pub fn is_resource<D: Descriptor>(message: &D) -> bool {
    message.resource_annotation().is_some()
}
