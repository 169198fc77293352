// each test binary uses a different subset of these helpers
#![allow(dead_code)]

use seqkit::{record, Record, Value};

pub(crate) fn users() -> Vec<Record> {
    vec![
        record! { id: 1, name: "AA", age: 32 },
        record! { id: 2, name: "BB", age: 25 },
        record! { id: 3, name: "CC", age: 32 },
        record! { id: 4, name: "DD", age: 28 },
        record! { id: 5, name: "EE", age: 27 },
        record! { id: 6, name: "FF", age: 32 },
        record! { id: 7, name: "GG", age: 24 },
    ]
}

pub(crate) fn age(user: &Record) -> i64 {
    user.get("age").and_then(Value::as_integer).unwrap_or_default()
}

pub(crate) fn names(users: &[Record]) -> String {
    users
        .iter()
        .map(|user| user.get("name").and_then(Value::as_str).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(", ")
}
