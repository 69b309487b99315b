//! Model constants for the influence and field-control computation.
//!
//! Parameter values follow "Wide Open Spaces: A statistical technique for
//! measuring space creation in professional soccer" (Fernandez & Bornn,
//! SSAC 2018) as fitted for gridiron tracking data in yards.

/// Field dimensions (yards)
pub mod field {
    /// Field length in yards, back of endzone to back of endzone
    pub const LENGTH_YD: f64 = 120.0;
    /// Field width in yards, sideline to sideline
    pub const WIDTH_YD: f64 = 53.3;
    /// Center X coordinate (yards)
    pub const CENTER_X: f64 = LENGTH_YD * 0.5;
    /// Center Y coordinate (yards)
    pub const CENTER_Y: f64 = WIDTH_YD * 0.5;
}

/// Influence model parameters
pub mod influence {
    /// Reference maximum player speed (yd per time unit). The speed ratio
    /// is `speed² / MAX_SPEED²`.
    pub const MAX_SPEED: f64 = 13.0;

    // ========================================
    // Influence radius curve R(d)
    // Quadratic up to the saturation distance, flat beyond it
    // ========================================

    /// Distance to the reference point beyond which the radius saturates (yd)
    pub const RADIUS_SATURATION_DIST: f64 = 18.0;
    /// Quadratic coefficient of the radius curve
    pub const RADIUS_QUAD_COEFF: f64 = 0.01854;
    /// Radius at zero distance from the reference point (yd)
    pub const RADIUS_MIN: f64 = 4.0;
    /// Saturated radius far from the reference point (yd)
    pub const RADIUS_MAX: f64 = 10.0;

    /// Distance the distribution mean sits ahead of the player, along the
    /// velocity unit vector (yd)
    pub const MEAN_SHIFT: f64 = 0.5;

    /// Additive speed smoothing. A strictly-zero speed would give a
    /// zero-length velocity vector (division by zero in the mean shift)
    /// and a degenerate covariance; every speed gets this increment before
    /// use so the zero case is handled without a branch.
    pub const SPEED_SMOOTHING: f64 = f64::EPSILON;
}

/// Grid construction defaults
pub mod grid {
    /// Default spacing between query points (yd)
    pub const DEFAULT_GRANULARITY: f64 = 0.7;
}
