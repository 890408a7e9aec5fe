mod property;

use crate::value::{AnswerSet, Value};

fn answers(pairs: &[(&str, Value)]) -> AnswerSet {
    let mut set = AnswerSet::new();
    for (name, value) in pairs {
        set.set(*name, value.clone());
    }
    set
}
