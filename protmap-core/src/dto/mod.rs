//! Wire-level response shapes of the ID-mapping service
//!
//! Every body the service can answer with is modeled as an explicit serde
//! schema and validated at the client boundary. Shapes that do not
//! deserialize are rejected there as protocol errors instead of being
//! probed field by field.

pub mod job;
pub mod mapping;
