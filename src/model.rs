//! Core data model for the range slider.
//! The selection is stored as whole percentages of the track width and is
//! mapped back to domain units only for display.

use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;

pub const PERCENT_MAX: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("domain max {max} must be greater than domain min {min}")]
    EmptyDomain { min: i64, max: i64 },
    #[error("domain [{min}, {max}] is wider than an i64 can hold")]
    DomainTooWide { min: i64, max: i64 },
    #[error("initial {bound} value {value} lies outside the domain [{min}, {max}]")]
    OutOfDomain {
        bound: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("initial min {min} is greater than initial max {max}")]
    InvertedSelection { min: i64, max: i64 },
    #[error("slider config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed integer range the slider represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    pub min: i64,
    pub max: i64,
}

impl Domain {
    pub fn new(min: i64, max: i64) -> Result<Self, ConfigError> {
        if max <= min {
            return Err(ConfigError::EmptyDomain { min, max });
        }
        // width() must not overflow
        if max.checked_sub(min).is_none() {
            return Err(ConfigError::DomainTooWide { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn width(&self) -> i64 {
        self.max - self.min
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Whole percentage of the domain width that `value` sits at.
    pub fn to_percent(&self, value: i64) -> u32 {
        let p = ((value - self.min) as f64 * 100.0 / self.width() as f64).round();
        p.clamp(0.0, PERCENT_MAX as f64) as u32
    }

    /// Domain value shown for a stored percentage. This rounds independently
    /// of `to_percent`, so the two do not always round-trip.
    pub fn label(&self, percent: u32) -> i64 {
        let offset = (percent as f64 * self.width() as f64 / 100.0).round() as i64;
        offset.saturating_add(self.min).clamp(self.min, self.max)
    }

    pub fn value_of(&self, selection: Selection) -> RangeValue {
        RangeValue {
            min: self.label(selection.min()),
            max: self.label(selection.max()),
        }
    }
}

/// Selected sub-range in domain units, as handed to `on_change` listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeValue {
    pub min: i64,
    pub max: i64,
}

/// Selected sub-range in percent of the track. Always `0 <= min <= max <= 100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    min: u32,
    max: u32,
}

impl Selection {
    pub fn new(min: u32, max: u32) -> Self {
        let max = max.min(PERCENT_MAX);
        Self {
            min: min.min(max),
            max,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn span(&self) -> u32 {
        self.max - self.min
    }

    pub fn with_min(self, percent: u32) -> Self {
        Self {
            min: percent.min(self.max),
            ..self
        }
    }

    pub fn with_max(self, percent: u32) -> Self {
        Self {
            max: percent.clamp(self.min, PERCENT_MAX),
            ..self
        }
    }

    /// Moves both ends so the selection starts at `start`, keeping its span.
    pub fn shifted_to(self, start: u32) -> Self {
        let span = self.span();
        let min = start.min(PERCENT_MAX - span);
        Self {
            min,
            max: min + span,
        }
    }

    pub fn apply(self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::MoveMin(p) => self.with_min(p),
            SelectionAction::MoveMax(p) => self.with_max(p),
            SelectionAction::MoveTrack(p) => self.shifted_to(p),
            SelectionAction::Reset(sel) => sel,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    MoveMin(u32),
    MoveMax(u32),
    /// New start of the whole selection, in percent.
    MoveTrack(u32),
    /// Replaces the selection, e.g. after the slider's config changed.
    Reset(Selection),
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            // unchanged; skip the re-render
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Validated construction parameters for one slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderConfig {
    domain: Domain,
    initial: RangeValue,
}

impl SliderConfig {
    pub fn new(
        domain_min: i64,
        domain_max: i64,
        initial_min: i64,
        initial_max: i64,
    ) -> Result<Self, ConfigError> {
        let domain = Domain::new(domain_min, domain_max)?;
        for (bound, value) in [("min", initial_min), ("max", initial_max)] {
            if !domain.contains(value) {
                return Err(ConfigError::OutOfDomain {
                    bound,
                    value,
                    min: domain.min,
                    max: domain.max,
                });
            }
        }
        if initial_min > initial_max {
            return Err(ConfigError::InvertedSelection {
                min: initial_min,
                max: initial_max,
            });
        }
        Ok(Self {
            domain,
            initial: RangeValue {
                min: initial_min,
                max: initial_max,
            },
        })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn initial_selection(&self) -> Selection {
        Selection::new(
            self.domain.to_percent(self.initial.min),
            self.domain.to_percent(self.initial.max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_percentages_follow_domain() {
        let cfg = SliderConfig::new(0, 20, 6, 15).unwrap();
        let sel = cfg.initial_selection();
        assert_eq!(sel.min(), 30);
        assert_eq!(sel.max(), 75);
        assert_eq!(cfg.domain().value_of(sel), RangeValue { min: 6, max: 15 });
    }

    #[test]
    fn offset_domain_maps_relative_to_min() {
        let d = Domain::new(-10, 10).unwrap();
        assert_eq!(d.to_percent(-10), 0);
        assert_eq!(d.to_percent(0), 50);
        assert_eq!(d.to_percent(10), 100);
        assert_eq!(d.label(25), -5);
    }

    #[test]
    fn labels_round_independently() {
        // 1/3 of the way through 0..3 is 33%; 33% of 3 rounds back to 1
        let d = Domain::new(0, 3).unwrap();
        assert_eq!(d.to_percent(1), 33);
        assert_eq!(d.label(33), 1);
        // neighbouring percentages can share a label
        let d = Domain::new(0, 7).unwrap();
        assert_eq!(d.label(51), 4);
        assert_eq!(d.label(50), 4);
        assert_eq!(d.label(49), 3);
    }

    #[test]
    fn rejects_malformed_config() {
        assert!(matches!(
            SliderConfig::new(5, 5, 5, 5),
            Err(ConfigError::EmptyDomain { min: 5, max: 5 })
        ));
        assert!(matches!(
            SliderConfig::new(0, 20, -1, 15),
            Err(ConfigError::OutOfDomain { bound: "min", value: -1, .. })
        ));
        assert!(matches!(
            SliderConfig::new(0, 20, 6, 21),
            Err(ConfigError::OutOfDomain { bound: "max", value: 21, .. })
        ));
        assert!(matches!(
            SliderConfig::new(0, 20, 15, 6),
            Err(ConfigError::InvertedSelection { min: 15, max: 6 })
        ));
    }

    #[test]
    fn rejects_domain_wider_than_i64() {
        assert!(matches!(
            SliderConfig::new(-1, i64::MAX, 0, 10),
            Err(ConfigError::DomainTooWide { min: -1, max: i64::MAX })
        ));
        assert!(matches!(
            Domain::new(i64::MIN, 0),
            Err(ConfigError::DomainTooWide { .. })
        ));
    }

    #[test]
    fn widest_domains_map_without_overflow() {
        let cfg = SliderConfig::new(1, i64::MAX, 1, i64::MAX).unwrap();
        let sel = cfg.initial_selection();
        assert_eq!((sel.min(), sel.max()), (0, 100));
        assert_eq!(cfg.domain().label(100), i64::MAX);
        assert_eq!(cfg.domain().label(0), 1);

        let d = Domain::new(i64::MIN, -1).unwrap();
        assert_eq!(d.label(0), i64::MIN);
        assert_eq!(d.label(100), -1);
    }

    #[test]
    fn selection_keeps_order() {
        let sel = Selection::new(30, 75);
        assert_eq!(sel.with_min(90), Selection::new(75, 75));
        assert_eq!(sel.with_max(10), Selection::new(30, 30));
        assert_eq!(sel.with_max(150).max(), 100);
        assert_eq!(Selection::new(80, 40), Selection::new(40, 40));
    }

    #[test]
    fn track_shift_preserves_span() {
        let sel = Selection::new(30, 75);
        assert_eq!(sel.shifted_to(0), Selection::new(0, 45));
        assert_eq!(sel.shifted_to(80), Selection::new(55, 100));
        assert_eq!(sel.shifted_to(10).span(), 45);
    }

    #[test]
    fn reduce_reuses_state_when_nothing_changes() {
        let state = Rc::new(Selection::new(30, 75));
        let same = state.clone().reduce(SelectionAction::MoveMin(30));
        assert!(Rc::ptr_eq(&state, &same));
        let moved = state.clone().reduce(SelectionAction::MoveMax(80));
        assert_eq!(*moved, Selection::new(30, 80));
    }

    #[test]
    fn reset_replaces_selection_for_new_config() {
        let state = Rc::new(Selection::new(30, 75));
        let next = SliderConfig::new(0, 50, 10, 40).unwrap().initial_selection();
        assert_eq!(*state.clone().reduce(SelectionAction::Reset(next)), Selection::new(20, 80));
        let same = state.clone().reduce(SelectionAction::Reset(Selection::new(30, 75)));
        assert!(Rc::ptr_eq(&state, &same));
    }
}
