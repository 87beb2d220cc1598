//! ISO 11270 curvature safety limiter.
//!
//! Constrains a desired path curvature so the commanded lateral acceleration
//! and lateral jerk stay inside fixed safety bounds at the current speed.

/// Maximum commanded lateral acceleration in m/s².
pub const MAX_LATERAL_ACCEL: f64 = 3.0;

/// Maximum commanded lateral jerk in m/s³.
pub const MAX_LATERAL_JERK: f64 = 5.0;

/// Horizon over which the jerk bound is applied, in seconds.
pub const JERK_TIME_HORIZON: f64 = 0.5;

/// Clamp a desired curvature to the ISO lateral acceleration/jerk bounds.
///
/// The acceleration bound caps curvature magnitude at
/// `MAX_LATERAL_ACCEL / v_ego²`. The jerk bound caps the per-step change
/// from `previous_curvature` at `(MAX_LATERAL_JERK * JERK_TIME_HORIZON) /
/// v_ego²`, scaled linearly by `dt / JERK_TIME_HORIZON`. The result is the
/// desired curvature clamped to the intersection of both windows.
///
/// Below 0.1 m/s curvature limiting is undefined and the output is forced
/// to zero.
///
/// # Arguments
///
/// * `v_ego` - Current speed in m/s
/// * `previous_curvature` - Previously applied curvature in 1/m
/// * `dt` - Time step in seconds; must be positive (caller contract)
/// * `desired_curvature` - Newly desired curvature in 1/m
#[inline]
pub fn limit_curvature(
    v_ego: f64,
    previous_curvature: f64,
    dt: f64,
    desired_curvature: f64,
) -> f64 {
    if v_ego <= 0.1 {
        return 0.0;
    }

    let speed_sq = v_ego * v_ego;
    let max_curvature_acc = MAX_LATERAL_ACCEL / speed_sq;
    let max_delta_curvature =
        (MAX_LATERAL_JERK * JERK_TIME_HORIZON) / speed_sq * (dt / JERK_TIME_HORIZON);

    let max_curvature = max_curvature_acc.min(previous_curvature + max_delta_curvature);
    let min_curvature = (-max_curvature_acc).max(previous_curvature - max_delta_curvature);

    // When the windows cross (previous curvature already outside the
    // acceleration bound) the lower bound wins, pulling the command back
    // toward the permitted range.
    desired_curvature.min(max_curvature).max(min_curvature)
}
