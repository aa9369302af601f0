//! Providers of scene descriptions.
//!
//! In a full deployment an analysis service turns a free-text problem
//! statement into a [`SceneDescription`]. That service sits behind the
//! [`SceneSource`] trait; this crate ships two stand-ins:
//!
//! - [`MockAnalysis`] answers every problem with the same inclined-plane scene;
//! - [`JsonScene`] replays a recorded JSON response.

use log::{debug, trace};

use freebody_core::scene::{Environment, SceneDescription, SceneObject};

use crate::FreebodyError;

/// Something that can turn a problem statement into a scene description.
pub trait SceneSource {
    /// Analyzes `problem` and returns the scene to draw.
    ///
    /// # Errors
    ///
    /// Returns [`FreebodyError`] when no scene can be produced.
    fn analyze(&self, problem: &str) -> Result<SceneDescription, FreebodyError>;
}

/// Fixed analysis result: a 2 kg block on a 30 degree slope with friction.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalysis;

impl MockAnalysis {
    pub fn new() -> Self {
        Self
    }

    /// The scene returned for every problem.
    pub fn response() -> SceneDescription {
        SceneDescription::new(
            Environment::InclinedPlane {
                angle: 30.0,
                friction: true,
            },
            vec![SceneObject::new("block1", 2.0, "kg")],
            vec![
                r"$$\sum F_x = ma \implies mg\sin(\alpha) - F_{tr} = ma$$".to_string(),
                r"$$\sum F_y = 0 \implies N - mg\cos(\alpha) = 0$$".to_string(),
                r"$$F_{tr} = \mu N$$".to_string(),
            ],
        )
    }
}

impl SceneSource for MockAnalysis {
    fn analyze(&self, problem: &str) -> Result<SceneDescription, FreebodyError> {
        debug!(problem_len = problem.len(); "Using mock analysis response");
        Ok(Self::response())
    }
}

/// A recorded analysis response in JSON form.
#[derive(Debug, Clone)]
pub struct JsonScene {
    src: String,
}

impl JsonScene {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

impl SceneSource for JsonScene {
    fn analyze(&self, _problem: &str) -> Result<SceneDescription, FreebodyError> {
        parse_scene(&self.src)
    }
}

/// Parses a JSON scene description.
///
/// # Errors
///
/// Returns [`FreebodyError::Scene`] carrying the source text, so the error
/// location can be reported.
///
/// # Examples
///
/// ```
/// use freebody::parse_scene;
///
/// let scene = parse_scene(r#"{"environment": {"type": "inclined_plane", "angle": 30}}"#)
///     .expect("valid scene");
/// assert_eq!(scene.environment().kind(), "inclined_plane");
///
/// assert!(parse_scene("{").is_err());
/// ```
pub fn parse_scene(src: &str) -> Result<SceneDescription, FreebodyError> {
    let scene: SceneDescription =
        serde_json::from_str(src).map_err(|err| FreebodyError::new_scene_error(err, src))?;
    trace!(scene:?; "Parsed scene description");
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_analysis_ignores_problem() {
        let source = MockAnalysis::new();
        let first = source.analyze("A block slides down a ramp").unwrap();
        let second = source.analyze("Something else entirely").unwrap();

        assert_eq!(first, second);
        assert_eq!(
            *first.environment(),
            Environment::InclinedPlane {
                angle: 30.0,
                friction: true
            }
        );
        assert_eq!(first.formulas().len(), 3);
        assert_eq!(first.formulas()[2], r"$$F_{tr} = \mu N$$");
    }

    #[test]
    fn test_json_scene_replays_response() {
        let source = JsonScene::new(
            r#"{"environment": {"type": "inclined_plane", "angle": 45, "friction": false},
                "formulas": ["N = mg\\cos\\alpha"]}"#,
        );

        let scene = source.analyze("ignored").unwrap();

        assert_eq!(
            *scene.environment(),
            Environment::InclinedPlane {
                angle: 45.0,
                friction: false
            }
        );
        assert_eq!(scene.formulas(), [r"N = mg\cos\alpha".to_string()]);
    }

    #[test]
    fn test_parse_scene_error_keeps_source() {
        let src = "{\n  \"environment\": 12\n}";

        match parse_scene(src) {
            Err(FreebodyError::Scene { err, src: kept }) => {
                assert_eq!(kept, src);
                assert_eq!(err.line(), 2);
            }
            other => panic!("expected scene error, got {other:?}"),
        }
    }
}
