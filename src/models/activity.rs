use serde::{Deserialize, Serialize};

/// One extracurricular offering. Keyed by name in the directory, so the
/// name itself lives in the surrounding map rather than here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Informational capacity. Signups are not gated on it.
    pub max_participants: u32,
    /// Participant emails in signup order. No email appears twice.
    pub participants: Vec<String>,
}
