//! Shared fixtures for facade tests.

use crate::engine::FormEngine;
use formflow_core::value::{AnswerSet, Value};
use formflow_schema::{
    node::{Field, Form, NavigationRule, Page},
    types::{ConditionOperator, FieldId, FieldType, FormId, PageId},
};

pub(crate) fn answers(pairs: &[(&str, Value)]) -> AnswerSet {
    let mut set = AnswerSet::new();
    for (name, value) in pairs {
        set.set(*name, value.clone());
    }

    set
}

/// Three pages: a profile page, a team page reached only by teams of five
/// or more, and a finish page.
pub(crate) fn onboarding_form() -> Form {
    let mut form = Form::new(FormId::new(40), "Onboarding");

    let mut profile = Page::first(PageId::new(1), "Profile", 0);
    profile.fields = vec![
        Field::new(FieldId::new(1), "nickname", FieldType::Text),
        Field::new(FieldId::new(2), "team_size", FieldType::Number),
    ];
    profile.navigation = vec![
        NavigationRule::when(
            FieldId::new(2),
            ConditionOperator::GreaterEqual,
            PageId::new(2),
        )
        .with_value("5"),
        NavigationRule::default_to(PageId::new(3)),
    ];

    let mut team = Page::new(PageId::new(2), "Team", 1);
    let mut summary = Field::new(FieldId::new(11), "summary", FieldType::Paragraph);
    summary.content = Some("@nickname now leads @team_name.".to_string());
    team.fields = vec![
        Field::new(FieldId::new(10), "team_name", FieldType::Text),
        summary,
    ];

    let mut finish = Page::new(PageId::new(3), "Done", 2);
    finish.fields = vec![Field::new(FieldId::new(20), "subscribed", FieldType::Boolean)];

    form.pages = vec![profile, team, finish];

    form
}

pub(crate) fn onboarding_engine() -> FormEngine {
    FormEngine::new(onboarding_form()).expect("fixture form validates")
}
