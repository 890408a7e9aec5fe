//! Condition folding: from one field's ordered rule list to an aggregate
//! effect.

use crate::{
    error::StructuralReferenceError,
    eval::{FieldCatalog, operator},
    obs::{MetricsEvent, sink},
    value::AnswerSet,
};
use formflow_schema::{node::ConditionRule, types::ConditionAction};

///
/// EffectSet
///
/// Aggregate outcome of folding a rule list. Visibility and enablement are
/// paired opposites where the later matching rule wins; `require` and
/// `skip` are monotonic within one fold and recomputed fresh on the next.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EffectSet {
    pub show: bool,
    pub hide: bool,
    pub enable: bool,
    pub disable: bool,
    pub require: bool,
    pub skip: bool,
}

impl EffectSet {
    /// Baseline for a rule set. A set with at least one `show` rule and no
    /// `hide` rule is opt-in: the field starts hidden and a matching rule
    /// reveals it. Every other mix starts visible. Enablement starts true
    /// and `require`/`skip` start false regardless of visibility polarity.
    #[must_use]
    pub fn baseline(rules: &[ConditionRule]) -> Self {
        let has_show = rules
            .iter()
            .any(|rule| rule.action == ConditionAction::Show);
        let has_hide = rules
            .iter()
            .any(|rule| rule.action == ConditionAction::Hide);
        let opt_in = has_show && !has_hide;

        Self {
            show: !opt_in,
            hide: false,
            enable: true,
            disable: false,
            require: false,
            skip: false,
        }
    }

    fn apply(&mut self, action: ConditionAction) {
        match action {
            ConditionAction::Show => {
                self.show = true;
                self.hide = false;
            }
            ConditionAction::Hide => {
                self.hide = true;
                self.show = false;
            }
            ConditionAction::Enable => {
                self.enable = true;
                self.disable = false;
            }
            ConditionAction::Disable => {
                self.disable = true;
                self.enable = false;
            }
            ConditionAction::Require => self.require = true,
            ConditionAction::Skip => self.skip = true,
            ConditionAction::Unsupported => {}
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.show && !self.hide
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enable && !self.disable
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        self.require
    }
}

/// Fold one field's ordered rules against the answer set.
///
/// Every rule is evaluated (no short-circuit) and every matching rule
/// applies its action in list order, so a later visibility outcome
/// overrides an earlier one. Rule sources resolve through the catalog; a
/// source naming no known field is a structural fault.
pub fn resolve_conditions<C: FieldCatalog>(
    rules: &[ConditionRule],
    answers: &AnswerSet,
    catalog: &C,
) -> Result<EffectSet, StructuralReferenceError> {
    let mut effect = EffectSet::baseline(rules);
    let mut matched = 0u64;

    for rule in rules {
        let source = catalog.resolve_name(&rule.source_field_name).ok_or_else(|| {
            StructuralReferenceError::UnknownField {
                name: rule.source_field_name.clone(),
            }
        })?;

        if operator::evaluate(rule.operator, answers.get(source.name), rule.value.as_deref()) {
            effect.apply(rule.action);
            matched = matched.saturating_add(1);
        }
    }

    sink::record(MetricsEvent::ConditionsResolved {
        rules: rules.len() as u64,
        matched,
    });

    Ok(effect)
}
