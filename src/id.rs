//! Short unique-identifier generation.
//!
//! `IdGenerator` is constructed once and passed explicitly to whatever
//! needs identifiers; there is no process-wide singleton to seed. The
//! instance holds no mutable state, so it is freely shareable across
//! threads.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use uuid::Uuid;

/// Generates 22-character URL-safe identifiers.
///
/// Each ID is a v4 UUID's 16 random bytes, base64-encoded without padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self) -> String {
        URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes())
    }
}
