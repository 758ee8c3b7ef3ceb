//! Conversion tables for CSS units.
//!
//! Each convertible unit belongs to exactly one `UnitGroup` and carries a
//! factor relative to the group's reference unit. Converting `value` from
//! unit `a` to unit `b` of the same group is `value * factor(a) / factor(b)`.
//!
//! ```ignore
//! use less_ir::units::{self, UnitGroup};
//! assert_eq!(units::group_of("deg"), Some(UnitGroup::Angle));
//! ```

/// Family of mutually convertible units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnitGroup {
    Length,
    Duration,
    Angle,
}

impl UnitGroup {
    /// Canonical unit that `unify` normalizes this group to.
    pub const fn base_unit(self) -> &'static str {
        match self {
            UnitGroup::Length => length::BASE,
            UnitGroup::Duration => duration::BASE,
            UnitGroup::Angle => angle::BASE,
        }
    }
}

/// Length factors, in meters.
pub mod length {
    pub const BASE: &str = "px";

    pub const M: f64 = 1.0;
    pub const CM: f64 = 0.01;
    pub const MM: f64 = 0.001;
    pub const IN: f64 = 0.0254;
    pub const PX: f64 = 0.0254 / 96.0;
    pub const PT: f64 = 0.0254 / 72.0;
    pub const PC: f64 = 0.0254 / 72.0 * 12.0;
}

/// Duration factors, in seconds.
pub mod duration {
    pub const BASE: &str = "s";

    pub const S: f64 = 1.0;
    pub const MS: f64 = 0.001;
}

/// Angle factors, in turns.
pub mod angle {
    pub const BASE: &str = "rad";

    pub const RAD: f64 = 1.0 / (2.0 * std::f64::consts::PI);
    pub const DEG: f64 = 1.0 / 360.0;
    pub const GRAD: f64 = 1.0 / 400.0;
    pub const TURN: f64 = 1.0;
}

/// Look up a unit's group and factor. Unit names match exactly.
pub fn lookup(unit: &str) -> Option<(UnitGroup, f64)> {
    let entry = match unit {
        "m" => (UnitGroup::Length, length::M),
        "cm" => (UnitGroup::Length, length::CM),
        "mm" => (UnitGroup::Length, length::MM),
        "in" => (UnitGroup::Length, length::IN),
        "px" => (UnitGroup::Length, length::PX),
        "pt" => (UnitGroup::Length, length::PT),
        "pc" => (UnitGroup::Length, length::PC),
        "s" => (UnitGroup::Duration, duration::S),
        "ms" => (UnitGroup::Duration, duration::MS),
        "rad" => (UnitGroup::Angle, angle::RAD),
        "deg" => (UnitGroup::Angle, angle::DEG),
        "grad" => (UnitGroup::Angle, angle::GRAD),
        "turn" => (UnitGroup::Angle, angle::TURN),
        _ => return None,
    };
    Some(entry)
}

pub fn group_of(unit: &str) -> Option<UnitGroup> {
    lookup(unit).map(|(group, _)| group)
}

/// Convert `value` between two units of the same group.
///
/// Returns `None` when either unit is unknown or the groups differ.
pub fn convert(value: f64, from: &str, to: &str) -> Option<f64> {
    let (from_group, from_factor) = lookup(from)?;
    let (to_group, to_factor) = lookup(to)?;
    if from_group != to_group {
        return None;
    }
    Some(value * from_factor / to_factor)
}
