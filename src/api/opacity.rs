use serde::{Deserialize, Serialize};

use crate::core::DataGroup;
use crate::error::{BehaviorError, BehaviorResult};

pub const DEFAULT_OPACITY: f64 = 1.0;
pub const DIMMED_OPACITY: f64 = 0.4;

/// Visibility tier of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpacityTier {
    Full,
    Dimmed,
}

/// Numeric opacity of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpacityTiers {
    pub full: f64,
    pub dimmed: f64,
}

impl Default for OpacityTiers {
    fn default() -> Self {
        Self {
            full: DEFAULT_OPACITY,
            dimmed: DIMMED_OPACITY,
        }
    }
}

impl OpacityTiers {
    pub fn validate(self) -> BehaviorResult<Self> {
        for (tier, value) in [("full", self.full), ("dimmed", self.dimmed)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(BehaviorError::InvalidOpacity(format!(
                    "`{tier}` opacity must be finite and in [0, 1]"
                )));
            }
        }
        if self.dimmed > self.full {
            return Err(BehaviorError::InvalidOpacity(
                "`dimmed` opacity must not exceed `full` opacity".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn value(self, tier: OpacityTier) -> f64 {
        match tier {
            OpacityTier::Full => self.full,
            OpacityTier::Dimmed => self.dimmed,
        }
    }
}

/// Per-column inputs of the opacity decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpacityInputs {
    pub selected: bool,
    pub highlight: bool,
    pub fade_because_selection: bool,
    pub fade_because_highlight: bool,
}

impl OpacityInputs {
    /// Derives inputs for `group` from chart-wide selection and highlight state.
    #[must_use]
    pub fn for_group(group: &DataGroup, has_selection: bool, has_highlight: bool) -> Self {
        Self {
            selected: group.selected,
            highlight: group.highlight,
            fade_because_selection: !group.highlight && has_selection,
            fade_because_highlight: !group.selected && has_highlight,
        }
    }
}

#[must_use]
pub fn resolve_opacity_tier(inputs: OpacityInputs) -> OpacityTier {
    if (inputs.fade_because_highlight && !inputs.highlight)
        || (inputs.fade_because_selection && !inputs.selected)
    {
        return OpacityTier::Dimmed;
    }
    OpacityTier::Full
}

/// Opacity for one column using the default tiers.
#[must_use]
pub fn opacity(
    selected: bool,
    highlight: bool,
    fade_because_selection: bool,
    fade_because_highlight: bool,
) -> f64 {
    let tier = resolve_opacity_tier(OpacityInputs {
        selected,
        highlight,
        fade_because_selection,
        fade_because_highlight,
    });
    OpacityTiers::default().value(tier)
}

#[cfg(test)]
mod tests {
    use super::{
        DIMMED_OPACITY, OpacityInputs, OpacityTier, OpacityTiers, opacity, resolve_opacity_tier,
    };
    use crate::core::DataGroup;

    #[test]
    fn no_selection_and_no_highlight_is_full() {
        let inputs = OpacityInputs::for_group(&DataGroup::new("a", "A"), false, false);
        assert_eq!(resolve_opacity_tier(inputs), OpacityTier::Full);
    }

    #[test]
    fn unselected_group_dims_when_something_else_is_selected() {
        let group = DataGroup::new("b", "B");
        let inputs = OpacityInputs::for_group(&group, true, false);
        assert_eq!(resolve_opacity_tier(inputs), OpacityTier::Dimmed);

        let selected = group.with_selected(true);
        let inputs = OpacityInputs::for_group(&selected, true, false);
        assert_eq!(resolve_opacity_tier(inputs), OpacityTier::Full);
    }

    #[test]
    fn highlighted_group_stays_full_under_highlight() {
        let highlighted = DataGroup::new("a", "A").with_highlight(true);
        let plain = DataGroup::new("b", "B");

        let inputs = OpacityInputs::for_group(&highlighted, false, true);
        assert_eq!(resolve_opacity_tier(inputs), OpacityTier::Full);
        let inputs = OpacityInputs::for_group(&plain, false, true);
        assert_eq!(resolve_opacity_tier(inputs), OpacityTier::Dimmed);
    }

    #[test]
    fn highlighted_group_is_not_faded_by_selection_elsewhere() {
        let highlighted = DataGroup::new("a", "A").with_highlight(true);
        let inputs = OpacityInputs::for_group(&highlighted, true, false);
        assert!(!inputs.fade_because_selection);
        assert_eq!(resolve_opacity_tier(inputs), OpacityTier::Full);
    }

    #[test]
    fn four_argument_opacity_uses_default_tiers() {
        assert_eq!(opacity(false, false, true, false), DIMMED_OPACITY);
        assert_eq!(opacity(true, false, true, false), 1.0);
        assert_eq!(opacity(false, false, false, false), 1.0);
    }

    #[test]
    fn tiers_validation_rejects_out_of_range_and_inverted_values() {
        assert!(OpacityTiers::default().validate().is_ok());
        assert!(
            OpacityTiers {
                full: 1.2,
                dimmed: 0.4
            }
            .validate()
            .is_err()
        );
        assert!(
            OpacityTiers {
                full: 0.3,
                dimmed: 0.4
            }
            .validate()
            .is_err()
        );
        assert!(
            OpacityTiers {
                full: 1.0,
                dimmed: f64::NAN
            }
            .validate()
            .is_err()
        );
    }
}
