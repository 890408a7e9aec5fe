use crate::{
    eval::{evaluate, resolve_conditions},
    test_support::TestCatalog,
    value::{AnswerSet, Value},
};
use formflow_schema::{
    node::ConditionRule,
    types::{ConditionAction, ConditionOperator, FieldType},
};
use proptest::prelude::*;
use std::collections::BTreeMap;

const SOURCES: [&str; 3] = ["alpha", "beta", "gamma"];

fn catalog() -> TestCatalog {
    TestCatalog::new()
        .with(1, "alpha", FieldType::Text)
        .with(2, "beta", FieldType::Number)
        .with(3, "gamma", FieldType::Checkbox)
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Empty),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e9..1.0e9f64).prop_map(Value::Number),
        "[ -~]{0,16}".prop_map(Value::Text),
        prop::collection::vec("[a-zA-Z0-9 ]{0,8}", 0..4).prop_map(Value::List),
    ]
}

fn arb_operator() -> impl Strategy<Value = ConditionOperator> {
    prop_oneof![
        Just(ConditionOperator::Contains),
        Just(ConditionOperator::Equals),
        Just(ConditionOperator::GreaterEqual),
        Just(ConditionOperator::GreaterThan),
        Just(ConditionOperator::In),
        Just(ConditionOperator::IsEmpty),
        Just(ConditionOperator::IsNotEmpty),
        Just(ConditionOperator::LessEqual),
        Just(ConditionOperator::LessThan),
        Just(ConditionOperator::NotContains),
        Just(ConditionOperator::NotEquals),
        Just(ConditionOperator::NotIn),
        Just(ConditionOperator::Unsupported),
    ]
}

fn arb_action() -> impl Strategy<Value = ConditionAction> {
    prop_oneof![
        Just(ConditionAction::Disable),
        Just(ConditionAction::Enable),
        Just(ConditionAction::Hide),
        Just(ConditionAction::Require),
        Just(ConditionAction::Show),
        Just(ConditionAction::Skip),
    ]
}

fn arb_source() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(SOURCES[0].to_string()),
        Just(SOURCES[1].to_string()),
        Just(SOURCES[2].to_string()),
    ]
}

fn arb_rule() -> impl Strategy<Value = ConditionRule> {
    (
        arb_source(),
        arb_operator(),
        prop::option::of("[ -~]{0,12}"),
        arb_action(),
    )
        .prop_map(|(source, operator, value, action)| {
            let mut rule = ConditionRule::new(source, operator, action);
            rule.value = value;
            rule
        })
}

fn arb_answers() -> impl Strategy<Value = AnswerSet> {
    prop::collection::vec(prop_oneof![Just(None), arb_value().prop_map(Some)], SOURCES.len())
        .prop_map(|values| {
            let mut entries = BTreeMap::new();
            for (name, value) in SOURCES.iter().zip(values) {
                if let Some(value) = value {
                    entries.insert((*name).to_string(), value);
                }
            }
            AnswerSet::from(entries)
        })
}

proptest! {
    #[test]
    fn evaluate_is_total_and_deterministic(
        operator in arb_operator(),
        value in arb_value(),
        literal in prop::option::of("[ -~]{0,12}"),
    ) {
        let first = evaluate(operator, &value, literal.as_deref());
        let second = evaluate(operator, &value, literal.as_deref());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn negated_equality_and_membership_mirror(value in arb_value(), literal in "[ -~]{0,12}") {
        prop_assert_eq!(
            evaluate(ConditionOperator::NotEquals, &value, Some(&literal)),
            !evaluate(ConditionOperator::Equals, &value, Some(&literal)),
        );
        prop_assert_eq!(
            evaluate(ConditionOperator::NotIn, &value, Some(&literal)),
            !evaluate(ConditionOperator::In, &value, Some(&literal)),
        );
    }

    #[test]
    fn negated_containment_mirrors_on_nonempty_needles(
        value in arb_value(),
        literal in "[ -~]{1,12}",
    ) {
        prop_assert_eq!(
            evaluate(ConditionOperator::NotContains, &value, Some(&literal)),
            !evaluate(ConditionOperator::Contains, &value, Some(&literal)),
        );
    }

    #[test]
    fn exactly_one_emptiness_operator_matches(value in arb_value()) {
        prop_assert_ne!(
            evaluate(ConditionOperator::IsEmpty, &value, None),
            evaluate(ConditionOperator::IsNotEmpty, &value, None),
        );
    }

    #[test]
    fn single_token_membership_matches_equality(value in arb_value(), literal in "[a-z0-9]{0,8}") {
        prop_assert_eq!(
            evaluate(ConditionOperator::In, &value, Some(&literal)),
            evaluate(ConditionOperator::Equals, &value, Some(&literal)),
        );
    }

    #[test]
    fn numeric_comparisons_partition_the_line(
        lhs in -1.0e9..1.0e9f64,
        rhs in -1.0e9..1.0e9f64,
    ) {
        let value = Value::Number(lhs);
        let literal = rhs.to_string();

        prop_assert_eq!(
            evaluate(ConditionOperator::GreaterThan, &value, Some(&literal)),
            !evaluate(ConditionOperator::LessEqual, &value, Some(&literal)),
        );
        prop_assert_eq!(
            evaluate(ConditionOperator::LessThan, &value, Some(&literal)),
            !evaluate(ConditionOperator::GreaterEqual, &value, Some(&literal)),
        );
    }
}

proptest! {
    #[test]
    fn condition_folds_are_deterministic(
        rules in prop::collection::vec(arb_rule(), 0..8),
        answers in arb_answers(),
    ) {
        let catalog = catalog();

        let first = resolve_conditions(&rules, &answers, &catalog)
            .expect("every source is cataloged");
        let second = resolve_conditions(&rules, &answers, &catalog)
            .expect("every source is cataloged");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn require_and_skip_track_matched_rules(
        rules in prop::collection::vec(arb_rule(), 0..8),
        answers in arb_answers(),
    ) {
        let catalog = catalog();
        let effect = resolve_conditions(&rules, &answers, &catalog)
            .expect("every source is cataloged");

        let matched = |action: ConditionAction| {
            rules.iter().any(|rule| {
                rule.action == action
                    && evaluate(
                        rule.operator,
                        answers.get(&rule.source_field_name),
                        rule.value.as_deref(),
                    )
            })
        };

        prop_assert_eq!(effect.is_required(), matched(ConditionAction::Require));
        prop_assert_eq!(effect.skip, matched(ConditionAction::Skip));
    }
}
