//! Payload assembly for the Beacon event model.
//!
//! Events serialize through two types:
//!
//! - [`Payload`]: an ordered string-keyed map that silently skips absent
//!   values, so optional fields never appear as `null` on the wire.
//! - [`SelfDescribingJson`]: the `{schema, data}` envelope that pairs a
//!   payload (or a nested envelope) with the versioned schema identifier
//!   that describes it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use beacon_payload::{Payload, SelfDescribingJson};
//!
//! let mut data = Payload::new();
//! data.add("name", "Home");
//! data.add_opt("type", None::<&str>); // absent fields stay absent
//!
//! let envelope = SelfDescribingJson::from_payload(
//!     "iglu:com.snowplowanalytics.mobile/screen/jsonschema/1-0-0",
//!     data,
//! );
//! ```

mod payload;
mod self_describing;

pub use payload::Payload;
pub use self_describing::SelfDescribingJson;
