//! Durable reference tokens: `@name` <-> `@#id`.
//!
//! Stored content carries the `@#id` form so renaming a field never breaks
//! it; the editing surface sees the `@name` form. Both transforms are pure
//! and leave anything they cannot resolve untouched.

use crate::{eval::FieldCatalog, text::reference_spans};
use formflow_schema::types::FieldId;

/// Replace every resolvable `@name` token with its durable `@#id` form.
/// Name matching is case-insensitive; already-encoded `@#id` tokens pass
/// through because `#` can never start a field name.
#[must_use]
pub fn encode_references<C: FieldCatalog>(text: &str, catalog: &C) -> String {
    let spans = reference_spans(text, catalog);
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in &spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str("@#");
        out.push_str(&span.field.id.to_string());
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);

    out
}

/// Replace every `@#id` token whose id resolves with the canonical `@name`
/// form. Id matching is exact; unknown or malformed ids stay verbatim.
#[must_use]
pub fn decode_references<C: FieldCatalog>(text: &str, catalog: &C) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at = 0;

    while let Some(offset) = text[at..].find("@#") {
        let marker = at + offset;
        let digits_start = marker + 2;
        let digits_len = text[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let token_end = digits_start + digits_len;

        out.push_str(&text[at..marker]);

        let resolved = text[digits_start..token_end]
            .parse::<u64>()
            .ok()
            .and_then(|id| catalog.resolve_id(FieldId::new(id)));

        if let Some(field) = resolved {
            out.push('@');
            out.push_str(field.name);
        } else {
            out.push_str(&text[marker..token_end]);
        }
        at = token_end;
    }
    out.push_str(&text[at..]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestCatalog;
    use formflow_schema::types::FieldType;
    use proptest::prelude::*;

    fn catalog() -> TestCatalog {
        TestCatalog::new()
            .with(7, "name", FieldType::Text)
            .with(8, "plan", FieldType::Select)
            .with(9, "plan_notes", FieldType::Textarea)
    }

    #[test]
    fn encode_swaps_names_for_ids() {
        let catalog = catalog();
        assert_eq!(
            encode_references("Dear @name, your @plan awaits", &catalog),
            "Dear @#7, your @#8 awaits"
        );
    }

    #[test]
    fn encode_uses_the_longest_name_at_each_marker() {
        let catalog = catalog();
        assert_eq!(encode_references("@plan_notes", &catalog), "@#9");
    }

    #[test]
    fn decode_swaps_ids_for_canonical_names() {
        let catalog = catalog();
        assert_eq!(
            decode_references("Dear @#7, your @#8 awaits", &catalog),
            "Dear @name, your @plan awaits"
        );
    }

    #[test]
    fn unknown_names_and_ids_stay_verbatim() {
        let catalog = catalog();
        assert_eq!(encode_references("@nobody here", &catalog), "@nobody here");
        assert_eq!(decode_references("@#404 here", &catalog), "@#404 here");
        assert_eq!(decode_references("@#x not digits", &catalog), "@#x not digits");
    }

    #[test]
    fn encode_leaves_already_encoded_tokens_alone() {
        let catalog = catalog();
        assert_eq!(encode_references("mixed @#7 and @plan", &catalog), "mixed @#7 and @#8");
    }

    #[test]
    fn round_trips_up_to_case_normalization() {
        let catalog = catalog();
        let original = "Dear @Name, your @PLAN awaits";

        let decoded = decode_references(&encode_references(original, &catalog), &catalog);
        assert_eq!(decoded, "Dear @name, your @plan awaits");
        assert!(decoded.eq_ignore_ascii_case(original));
    }

    fn arb_field_names() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::btree_set("[a-z][a-z0-9_]{0,9}", 1..5)
            .prop_map(|names| names.into_iter().collect())
    }

    proptest! {
        // Filler always opens with a character outside the name charset, so
        // every generated reference is cleanly delimited.
        #[test]
        fn encode_then_decode_restores_canonical_text(
            names in arb_field_names(),
            lead in "[a-z ]{0,8}",
            picks in proptest::collection::vec(
                (any::<prop::sample::Index>(), "[ .,!?][a-z ]{0,6}"),
                0..6,
            ),
        ) {
            let mut catalog = TestCatalog::new();
            for (id, name) in (1..).zip(&names) {
                catalog = catalog.with(id, name, FieldType::Text);
            }

            let mut text = lead;
            for (pick, filler) in &picks {
                text.push('@');
                text.push_str(&names[pick.index(names.len())]);
                text.push_str(filler);
            }

            let encoded = encode_references(&text, &catalog);
            prop_assert_eq!(decode_references(&encoded, &catalog), text);
        }
    }
}
