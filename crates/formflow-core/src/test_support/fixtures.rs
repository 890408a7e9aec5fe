//! A small branching form shared across evaluator tests.

use formflow_schema::{
    node::{Choice, ConditionRule, Field, FieldOptions, Form, NavigationRule, Page},
    types::{ConditionAction, ConditionOperator, FieldId, FieldType, FormId, PageId},
};

pub const PAGE_BASICS: PageId = PageId::new(1);
pub const PAGE_DETAILS: PageId = PageId::new(2);
pub const PAGE_CONFIRM: PageId = PageId::new(3);

pub const FIELD_AGE: FieldId = FieldId::new(11);

/// Event signup in three pages.
///
/// Basics: `full_name`, `age`, `contact_pref`, and `phone` (shown and
/// required only when the contact preference is `phone`). Its navigation
/// sends adults (`age >= 18`) to the details page and everyone else
/// straight to confirmation.
///
/// Details: `plan` plus `premium_reason` (shown when the plan is
/// `premium`) and a paragraph `summary` that references earlier answers.
/// No navigation rules, so it falls through structurally.
///
/// Confirmation: a lone `confirm` boolean on the structurally last page.
pub fn signup_form() -> Form {
    let mut form = Form::new(FormId::new(1), "Event signup");

    let mut basics = Page::first(PAGE_BASICS, "Basics", 0);
    basics.fields = vec![
        field(10, "full_name", FieldType::Text, 0),
        field(11, "age", FieldType::Number, 1),
        choice_field(
            12,
            "contact_pref",
            FieldType::Select,
            2,
            &["email", "phone"],
        ),
        phone_field(),
    ];
    basics.navigation = vec![
        NavigationRule::when(FIELD_AGE, ConditionOperator::GreaterEqual, PAGE_DETAILS)
            .with_value("18"),
        NavigationRule::default_to(PAGE_CONFIRM),
    ];

    let mut details = Page::new(PAGE_DETAILS, "Details", 1);
    details.fields = vec![
        choice_field(20, "plan", FieldType::Select, 0, &["basic", "premium"]),
        premium_reason_field(),
        summary_field(),
    ];

    let mut confirm = Page::new(PAGE_CONFIRM, "Confirmation", 2);
    confirm.fields = vec![field(30, "confirm", FieldType::Boolean, 0)];

    form.pages = vec![basics, details, confirm];
    form
}

fn field(id: u64, name: &str, field_type: FieldType, order: u32) -> Field {
    let mut field = Field::new(FieldId::new(id), name, field_type);
    field.order = order;
    field
}

fn choice_field(id: u64, name: &str, field_type: FieldType, order: u32, values: &[&str]) -> Field {
    let mut field = field(id, name, field_type, order);
    field.options = FieldOptions::Choices {
        choices: values
            .iter()
            .map(|value| Choice::new(*value, *value))
            .collect(),
    };
    field
}

fn phone_field() -> Field {
    let mut phone = field(13, "phone", FieldType::Phone, 3);
    phone.is_visible = false;
    phone.conditions = vec![
        ConditionRule::new("contact_pref", ConditionOperator::Equals, ConditionAction::Show)
            .with_value("phone"),
        ConditionRule::new(
            "contact_pref",
            ConditionOperator::Equals,
            ConditionAction::Require,
        )
        .with_value("phone"),
    ];
    phone
}

fn premium_reason_field() -> Field {
    let mut reason = field(21, "premium_reason", FieldType::Textarea, 1);
    reason.conditions = vec![ConditionRule::new(
        "plan",
        ConditionOperator::Equals,
        ConditionAction::Show,
    )
    .with_value("premium")];
    reason
}

fn summary_field() -> Field {
    let mut summary = field(22, "summary", FieldType::Paragraph, 2);
    summary.content = Some("Thanks @full_name, you chose the @plan plan.".to_string());
    summary
}
