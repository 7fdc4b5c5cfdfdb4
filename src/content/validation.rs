//! Validation for configuration values that would break the run rules.

use super::data::RunnerConfig;

/// A value that was out of range and the value used instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub field: &'static str,
    pub value: String,
    pub replacement: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' = {} is out of range, using {}",
            self.field, self.value, self.replacement
        )
    }
}

/// Helper macro for clamping a value and recording the change
macro_rules! check_range {
    ($warnings:expr, $field:expr, $name:expr, $valid:expr, $replacement:expr) => {
        if !$valid {
            $warnings.push(ValidationWarning {
                field: $name,
                value: format!("{:?}", $field),
                replacement: format!("{:?}", $replacement),
            });
            $field = $replacement;
        }
    };
}

/// Clamp out-of-range values in place.
/// Returns a warning per corrected field, empty if the config was valid.
pub fn validate_config(config: &mut RunnerConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let defaults = RunnerConfig::default();

    let ratio = config.slide.height_ratio;
    check_range!(
        warnings,
        config.slide.height_ratio,
        "slide.height_ratio",
        ratio > 0.0 && ratio <= 1.0,
        ratio.clamp(0.05, 1.0)
    );

    let down = config.slide.offset_down_ratio;
    check_range!(
        warnings,
        config.slide.offset_down_ratio,
        "slide.offset_down_ratio",
        (0.0..=1.0).contains(&down),
        down.clamp(0.0, 1.0)
    );

    check_range!(
        warnings,
        config.max_health,
        "max_health",
        config.max_health > 0,
        defaults.max_health
    );

    check_range!(
        warnings,
        config.jump.mass,
        "jump.mass",
        config.jump.mass > 0.0,
        defaults.jump.mass
    );

    if let Some(probe) = config.ground_probe.as_mut() {
        check_range!(
            warnings,
            probe.radius,
            "ground_probe.radius",
            probe.radius > 0.0,
            0.15
        );
    }

    check_range!(
        warnings,
        config.collider.height,
        "collider.height",
        config.collider.height > 0.0,
        defaults.collider.height
    );

    check_range!(
        warnings,
        config.collider.width,
        "collider.width",
        config.collider.width > 0.0,
        defaults.collider.width
    );

    let course = &mut config.course;
    check_range!(
        warnings,
        course.segment_count,
        "course.segment_count",
        course.segment_count > 0,
        defaults.course.segment_count
    );

    check_range!(
        warnings,
        course.segment_length,
        "course.segment_length",
        course.segment_length > 0.0,
        defaults.course.segment_length
    );

    let gap = course.gap_chance;
    check_range!(
        warnings,
        course.gap_chance,
        "course.gap_chance",
        (0.0..=1.0).contains(&gap),
        gap.clamp(0.0, 1.0)
    );

    let obstacle = course.obstacle_chance;
    check_range!(
        warnings,
        course.obstacle_chance,
        "course.obstacle_chance",
        (0.0..=1.0).contains(&obstacle),
        obstacle.clamp(0.0, 1.0)
    );

    check_range!(
        warnings,
        config.scroll.speed,
        "scroll.speed",
        config.scroll.speed >= 0.0,
        defaults.scroll.speed
    );

    warnings
}
