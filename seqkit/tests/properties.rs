use proptest::prelude::*;

use seqkit::{
    compose, every, every_by, filter, find, find_index, library, map, matches, not, some,
    some_by, try_map, Error, Value,
};

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-3i64..3).prop_map(Value::from),
        prop_oneof![Just(0.0), Just(1.5), Just(f64::NAN)].prop_map(Value::from),
        "[a-b]{0,2}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn filter_keeps_only_matching(numbers in prop::collection::vec(-50i32..50, 0..40), bound in -50i32..50) {
        let result = filter(&numbers, |n, _, _| *n < bound).unwrap();
        prop_assert!(result.len() <= numbers.len());
        prop_assert!(result.iter().all(|n| *n < bound));
        // order is preserved
        let expected: Vec<i32> = numbers.iter().copied().filter(|n| *n < bound).collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn map_is_one_to_one(numbers in prop::collection::vec(any::<i16>(), 0..40)) {
        let transform = |n: &i16, i: usize, s: &[i16]| (*n as i64) * 3 + i as i64 - s.len() as i64;
        let result = map(&numbers, transform);
        prop_assert_eq!(result.len(), numbers.len());
        for (i, value) in result.iter().enumerate() {
            prop_assert_eq!(*value, transform(&numbers[i], i, &numbers));
        }
    }

    #[test]
    fn find_agrees_with_find_index(numbers in prop::collection::vec(0u8..10, 0..30), target in 0u8..10) {
        let index = find_index(&numbers, |n, _, _| *n == target).unwrap();
        let found = find(&numbers, |n, _, _| *n == target).unwrap();
        prop_assert_eq!(found, index.map(|i| &numbers[i]));
        prop_assert_eq!(index, numbers.iter().position(|n| *n == target));
    }

    #[test]
    fn every_and_some_are_dual(values in prop::collection::vec(value(), 0..12)) {
        let negated = map(&values, |v, _, _| not(v));
        prop_assert_eq!(every(&values).unwrap(), !some(&negated).unwrap());
        prop_assert_eq!(some(&values).unwrap(), !every(&negated).unwrap());
    }

    #[test]
    fn dynamic_compositions_agree(values in prop::collection::vec(value(), 0..12)) {
        let argument = [Value::List(values.clone())];
        prop_assert_eq!(
            library::compose_some().call(&argument).unwrap(),
            Value::from(some(&values).unwrap())
        );
        prop_assert_eq!(
            library::compose_every().call(&argument).unwrap(),
            Value::from(every(&values).unwrap())
        );
    }

    #[test]
    fn every_by_stops_at_first_failure(numbers in prop::collection::vec(0u8..4, 0..30)) {
        let mut calls = 0;
        let all_nonzero = every_by(&numbers, |n, _, _| {
            calls += 1;
            *n != 0
        }).unwrap();
        let expected_calls = numbers.iter().position(|n| *n == 0).map_or(numbers.len(), |i| i + 1);
        prop_assert_eq!(all_nonzero, !numbers.contains(&0));
        prop_assert_eq!(calls, expected_calls);
    }

    #[test]
    fn static_composition_law(x in -1000i64..1000) {
        let f = |x: i64| x * 2;
        let g = |x: i64| x - 7;
        let h = |x: i64| x.rem_euclid(13);
        let composed = compose!(f, g, h);
        prop_assert_eq!(composed(x), f(g(h(x))));
    }

    #[test]
    fn operations_are_idempotent(ages in prop::collection::vec(20i64..40, 0..20), target in 20i64..40) {
        let users: Vec<_> = ages
            .iter()
            .enumerate()
            .map(|(i, age)| seqkit::record! { id: i as i64, age: *age })
            .collect();
        let predicate = matches(seqkit::record! { age: target });
        prop_assert_eq!(
            filter(&users, predicate.predicate()).unwrap(),
            filter(&users, predicate.predicate()).unwrap()
        );
        prop_assert_eq!(
            find_index(&users, predicate.predicate()).unwrap(),
            find_index(&users, predicate.predicate()).unwrap()
        );
        prop_assert_eq!(
            find(&users, predicate.predicate()).unwrap(),
            find(&users, predicate.predicate()).unwrap()
        );
        prop_assert_eq!(
            some_by(&users, predicate.predicate()).unwrap(),
            some_by(&users, predicate.predicate()).unwrap()
        );
        prop_assert_eq!(
            every_by(&users, predicate.predicate()).unwrap(),
            every_by(&users, predicate.predicate()).unwrap()
        );
        for user in &users {
            prop_assert_eq!(predicate.test(user), predicate.test(user));
        }

        let accessor = seqkit::property_accessor("age");
        prop_assert_eq!(map(&users, accessor.transform()), map(&users, accessor.transform()));
        let first = try_map(&users, accessor.clone().into_transform()).unwrap();
        let second = try_map(&users, accessor.into_transform()).unwrap();
        prop_assert_eq!(&first, &second);

        let above = map(&ages, |age, _, _| *age - target);
        prop_assert_eq!(some(&above).unwrap(), some(&above).unwrap());
        prop_assert_eq!(every(&above).unwrap(), every(&above).unwrap());

        let argument = [Value::List(first)];
        let composition = library::compose_every();
        prop_assert_eq!(
            composition.call(&argument).unwrap(),
            composition.call(&argument).unwrap()
        );
    }
}

#[test]
fn dynamic_composition_law() {
    let add = |amount: i64| {
        seqkit::unary(move |value| match value {
            Value::Integer(i) => Ok(Value::Integer(i + amount)),
            other => Err(Error::Type {
                expected: seqkit::ValueKind::Integer,
                found: other.kind(),
            }),
        })
    };
    let double = seqkit::unary(|value| Ok(Value::from(value.as_integer().unwrap_or(0) * 2)));
    let composition = seqkit::compose(vec![double.clone(), add(3), add(-1)]).unwrap();
    for x in -5..5 {
        let expected = double(&[add(3)(&[add(-1)(&[Value::from(x)]).unwrap()]).unwrap()]).unwrap();
        assert_eq!(composition.call(&[Value::from(x)]).unwrap(), expected);
    }
}
