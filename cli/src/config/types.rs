use serde::{Deserialize, Serialize};

/// Global settings shared by every profile.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Settings {
    /// Profile used when neither `--profile` nor `PAPERRAG_PROFILE` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
}
