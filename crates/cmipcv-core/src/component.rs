//! The closed vocabulary of coupled model components.

use serde::{Deserialize, Serialize};

/// A model component an experiment may require or allow.
///
/// Component names appear lower-cased in the emitted JSON, matching the
/// `required_model_components` / `additional_allowed_model_components`
/// conventions of the CV schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelComponent {
    /// Coupled atmosphere-ocean general circulation model
    Aogcm,
    /// Atmosphere-only general circulation model
    Agcm,
    /// Interactive aerosols
    Aer,
    /// Interactive atmospheric chemistry
    Chem,
    /// Interactive biogeochemistry (carbon cycle)
    Bgc,
}

impl std::fmt::Display for ModelComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModelComponent::Aogcm => "aogcm",
            ModelComponent::Agcm => "agcm",
            ModelComponent::Aer => "aer",
            ModelComponent::Chem => "chem",
            ModelComponent::Bgc => "bgc",
        };
        write!(f, "{name}")
    }
}
