//! Backdrop layer state
//!
//! The two background layers share one distance measurement (pointer distance
//! from the viewport center) but map it to blur strength through opposite
//! policies, so focus shifts between them as the pointer moves. Which layer
//! sharpens where is a scene-level variant choice; the two conventions must
//! never be mixed within one build.

use serde::{Deserialize, Serialize};

use crate::smoothing::{SMOOTHING, Smoothed};
use crate::Pointer;

/// Depth of the static backdrop quad.
pub const STATIC_LAYER_Z: f32 = -6.0;

/// Depth of the animated backdrop quad.
pub const ANIMATED_LAYER_Z: f32 = -3.0;

/// Blur tap spacing for the static backdrop shader instance.
pub const STATIC_TAP_SCALE: f32 = 0.002;

/// Blur tap spacing for the animated backdrop shader instance.
pub const ANIMATED_TAP_SCALE: f32 = 0.0025;

/// Pointer-follow rotation gain around Y (animated backdrop).
pub const ROTATION_GAIN_Y: f32 = 0.05;

/// Pointer-follow rotation gain around X (animated backdrop).
pub const ROTATION_GAIN_X: f32 = 0.02;

/// Distance threshold / blur ceiling shared by both policies.
const BLUR_KNEE: f32 = 0.3;

/// Distance gain shared by both policies.
const BLUR_GAIN: f32 = 0.5;

/// Which of the two shipped distance-to-blur conventions is active.
///
/// `Classic` is the wiring of the released page: the static backdrop is sharp
/// while the pointer rests near the center and blurs as it drifts outward,
/// while the animated backdrop does the opposite. `Inverted` swaps both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlurVariant {
    #[default]
    Classic,
    Inverted,
}

impl BlurVariant {
    /// Blur strength for the static backdrop at pointer distance `d`.
    pub fn static_blur(self, d: f32) -> f32 {
        match self {
            BlurVariant::Classic => ((d - BLUR_KNEE) * BLUR_GAIN).max(0.0),
            BlurVariant::Inverted => (BLUR_KNEE - d * BLUR_GAIN).max(0.0),
        }
    }

    /// Blur strength for the animated backdrop at pointer distance `d`.
    ///
    /// Always the complement of [`Self::static_blur`] so one build never
    /// mixes conventions.
    pub fn animated_blur(self, d: f32) -> f32 {
        match self {
            BlurVariant::Classic => (BLUR_KNEE - d * BLUR_GAIN).max(0.0),
            BlurVariant::Inverted => (d * BLUR_GAIN).min(BLUR_KNEE),
        }
    }
}

/// Per-tick state of the static backdrop: blur only, no motion.
#[derive(Debug, Clone, Copy)]
pub struct StaticBackdrop {
    variant: BlurVariant,
    blur: f32,
}

impl StaticBackdrop {
    pub fn new(variant: BlurVariant) -> Self {
        Self { variant, blur: 0.0 }
    }

    pub fn tick(&mut self, pointer: Pointer) {
        self.blur = self.variant.static_blur(pointer.distance_from_center());
    }

    /// Current `mouse_distance` uniform value.
    pub fn blur(&self) -> f32 {
        self.blur
    }
}

/// Per-tick state of the animated backdrop: blur plus smoothed rotation
/// following the pointer.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedBackdrop {
    variant: BlurVariant,
    blur: f32,
    rotation_y: Smoothed,
    rotation_x: Smoothed,
}

impl AnimatedBackdrop {
    pub fn new(variant: BlurVariant) -> Self {
        Self {
            variant,
            blur: 0.0,
            rotation_y: Smoothed::default(),
            rotation_x: Smoothed::default(),
        }
    }

    pub fn tick(&mut self, pointer: Pointer) {
        self.rotation_y
            .approach(pointer.x * ROTATION_GAIN_Y, SMOOTHING);
        self.rotation_x
            .approach(-pointer.y * ROTATION_GAIN_X, SMOOTHING);
        self.blur = self.variant.animated_blur(pointer.distance_from_center());
    }

    pub fn blur(&self) -> f32 {
        self.blur
    }

    /// Rotation around the Y axis in radians.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y.get()
    }

    /// Rotation around the X axis in radians.
    pub fn rotation_x(&self) -> f32 {
        self.rotation_x.get()
    }
}
