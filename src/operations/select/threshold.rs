use crate::error::GeometryError;

/// Angle used when no manual threshold is given.
///
/// Suits most UV spheres and similar rounded surfaces.
pub const DEFAULT_ANGLE_THRESHOLD: f64 = 160.0;

/// Tolerance applied when comparing an angle against the threshold.
pub const EPSILON: f64 = 1e-5;

/// Minimum angle, in degrees, for two edges to continue the same path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleThreshold {
    degrees: f64,
}

impl AngleThreshold {
    /// Creates a threshold of `degrees`.
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees` is not within `[0, 180]`.
    pub fn new(degrees: f64) -> Result<Self, GeometryError> {
        if !(0.0..=180.0).contains(&degrees) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "angle threshold",
                value: degrees,
                min: 0.0,
                max: 180.0,
            });
        }
        Ok(Self { degrees })
    }

    /// Returns the threshold in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Returns `true` if `angle` is at least the threshold, within [`EPSILON`].
    #[must_use]
    pub fn admits(&self, angle: f64) -> bool {
        angle >= self.degrees - EPSILON
    }
}

impl Default for AngleThreshold {
    fn default() -> Self {
        Self {
            degrees: DEFAULT_ANGLE_THRESHOLD,
        }
    }
}

/// How the threshold for a trace is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThresholdMode {
    /// Always trace with [`DEFAULT_ANGLE_THRESHOLD`].
    #[default]
    Default,
    /// Trace with a user-chosen threshold.
    Manual(AngleThreshold),
}

impl ThresholdMode {
    /// Picks the mode for a user-entered value: any value other than the
    /// default switches to [`ThresholdMode::Manual`].
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees` is not within `[0, 180]`.
    pub fn from_degrees(degrees: f64) -> Result<Self, GeometryError> {
        let threshold = AngleThreshold::new(degrees)?;
        if (degrees - DEFAULT_ANGLE_THRESHOLD).abs() < f64::EPSILON {
            Ok(Self::Default)
        } else {
            Ok(Self::Manual(threshold))
        }
    }

    /// The threshold this mode traces with.
    #[must_use]
    pub fn resolve(&self) -> AngleThreshold {
        match self {
            Self::Default => AngleThreshold::default(),
            Self::Manual(threshold) => *threshold,
        }
    }
}
