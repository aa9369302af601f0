//! Scene description consumed by the diagram renderer.
//!
//! A [`SceneDescription`] is what the analysis service hands back for a
//! problem statement: the environment to draw, the bodies involved, and the
//! formulas to typeset next to the diagram. The JSON shape is:
//!
//! ```json
//! {
//!   "environment": { "type": "inclined_plane", "angle": 30, "friction": true },
//!   "objects": [ { "id": "block1", "mass": 2, "unit": "kg" } ],
//!   "formulas": [ "$$F_{tr} = \\mu N$$" ]
//! }
//! ```
//!
//! The `environment.type` tag selects a closed set of variants. Tags this
//! crate does not know deserialize into [`Environment::Unknown`] instead of
//! failing, so callers can still show a fallback message.

use serde::{Deserialize, Serialize};

/// The input of a single render: environment, bodies and formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    environment: Environment,
    #[serde(default)]
    objects: Vec<SceneObject>,
    #[serde(default)]
    formulas: Vec<String>,
}

impl SceneDescription {
    /// Creates a scene description from its parts.
    pub fn new(environment: Environment, objects: Vec<SceneObject>, formulas: Vec<String>) -> Self {
        Self {
            environment,
            objects,
            formulas,
        }
    }

    /// Returns the environment to draw.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the bodies taking part in the scene.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Returns the formula markup strings, in display order.
    pub fn formulas(&self) -> &[String] {
        &self.formulas
    }
}

/// The physical setting of a scene, tagged by `type` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Environment {
    /// A block resting on a slope.
    InclinedPlane {
        /// Slope angle in degrees, expected strictly between 0 and 90.
        angle: f32,
        /// Whether the surface has friction.
        #[serde(default)]
        friction: bool,
    },
    /// Any environment type this renderer cannot draw.
    #[serde(other)]
    Unknown,
}

impl Environment {
    /// Returns the JSON tag of this environment.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InclinedPlane { .. } => "inclined_plane",
            Self::Unknown => "unknown",
        }
    }
}

/// A body in the scene. Carried through for completeness; the renderer does
/// not use it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    id: String,
    mass: f64,
    unit: String,
}

impl SceneObject {
    pub fn new(id: impl Into<String>, mass: f64, unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mass,
            unit: unit.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}
