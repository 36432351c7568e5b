//! Request payload for `POST /api/generate`.

use serde::{Deserialize, Serialize};

/// Presets the service is known to accept. Informational only — the server
/// owns this set and the client sends whatever it is given.
pub const KNOWN_PRESETS: &[&str] = &["standard", "short"];

/// Destinations the service is known to accept. Informational only.
pub const KNOWN_DESTINATIONS: &[&str] = &["release", "update", "social", "internal"];

/// Target ref the service assumes when none is given.
pub const DEFAULT_TARGET_REF: &str = "HEAD";

/// The JSON body sent to `/api/generate`.
///
/// Field names follow the service's wire contract (camelCase). `preset` and
/// `destination` are deliberately plain strings: their value sets are
/// server-defined and may grow, so the client never validates them locally.
/// The same goes for `base_ref`/`target_ref` — resolving them against the
/// repository is the server's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Repository slug in `owner/name` form.
    pub repo: String,
    /// Formatting preset, e.g. `"standard"`.
    pub preset: String,
    /// Audience for the notes, e.g. `"internal"`.
    pub destination: String,
    /// Whether the draft should include a "why it matters" section.
    pub include_why: bool,
    /// Ref marking the start of the comparison range.
    pub base_ref: String,
    /// Ref marking the end of the comparison range.
    pub target_ref: String,
    /// Link to the published release, shown in the draft's Links section.
    /// Only the release destination usually sets this; omitted from the
    /// wire when empty so the base payload keeps its six-key shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_url: Option<String>,
}

impl GenerateRequest {
    /// Build a request for the range `base_ref..target_ref` of `repo`.
    pub fn new(
        repo: impl Into<String>,
        preset: impl Into<String>,
        destination: impl Into<String>,
        include_why: bool,
        base_ref: impl Into<String>,
        target_ref: impl Into<String>,
    ) -> Self {
        Self {
            repo: repo.into(),
            preset: preset.into(),
            destination: destination.into(),
            include_why,
            base_ref: base_ref.into(),
            target_ref: target_ref.into(),
            release_url: None,
        }
    }

    /// Attach a release URL to the payload.
    pub fn with_release_url(mut self, release_url: impl Into<String>) -> Self {
        self.release_url = Some(release_url.into());
        self
    }
}
