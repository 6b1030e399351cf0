//! Vehicle models known to the prediction service.

/// A selectable vehicle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleModel {
    /// Identifier sent to the service.
    pub id: &'static str,
    /// Label shown to the user.
    pub label: &'static str,
}

/// All models, in display order.
pub const MODELS: [VehicleModel; 4] = [
    VehicleModel {
        id: "c_300",
        label: "C 300 Sedan",
    },
    VehicleModel {
        id: "e_350",
        label: "E 350 Sedan",
    },
    VehicleModel {
        id: "glc_300",
        label: "GLC 300 SUV",
    },
    VehicleModel {
        id: "gle_350",
        label: "GLE 350 SUV",
    },
];

/// Default model for a single prediction and for the first compare slot.
pub const DEFAULT_MODEL: &str = "c_300";

/// Default model for the second compare slot.
pub const DEFAULT_COMPARE_MODEL: &str = "e_350";

/// Look up a model by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static VehicleModel> {
    MODELS.iter().find(|m| m.id == id)
}

/// Position of a model in [`MODELS`].
#[must_use]
pub fn position(id: &str) -> Option<usize> {
    MODELS.iter().position(|m| m.id == id)
}

/// Label for a model id, falling back to the id itself.
#[must_use]
pub fn label_for(id: &str) -> &str {
    find(id).map_or(id, |m| m.label)
}
