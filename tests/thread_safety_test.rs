//! Tests for sharing a configured schema across threads.

use fieldcheck::{number, text, Schema, TldSet, UrlOptions};
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn user_schema() -> Schema {
    Schema::new()
        .field(text("name").required().alpha())
        .field(number("age").required().integer().positive())
        .field(text("site").url(UrlOptions::new()))
}

#[test]
fn test_concurrent_validation() {
    let schema = Arc::new(user_schema());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let result = schema.validate(&json!({
                    "name": "User",
                    "age": 20 + i,
                    "site": "https://example.org"
                }));
                assert!(result.is_success());

                let result = schema.validate(&json!({"name": format!("User{}", i), "age": 20}));
                assert!(result.is_failure());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_tld_access() {
    let handles: Vec<_> = (0..10)
        .map(|_| {
            thread::spawn(|| {
                let tlds = TldSet::iana();
                assert!(tlds.contains("com"));
                tlds
            })
        })
        .collect();

    let sets: Vec<Arc<TldSet>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for set in &sets[1..] {
        assert!(Arc::ptr_eq(&sets[0], set));
    }
}

#[test]
fn test_scoped_threads_borrow_schema() {
    let schema = user_schema();

    thread::scope(|scope| {
        for i in 1..=8 {
            let schema = &schema;
            scope.spawn(move || {
                let result = schema.validate(&json!({"name": "Ada", "age": i}));
                assert!(result.is_success());
                let result = schema.validate(&json!({"name": "Ada", "age": -i}));
                assert!(result.is_failure());
            });
        }
    });
}

#[test]
fn test_parallel_batch_matches_sequential() {
    let schema = user_schema();
    let inputs: Vec<_> = (0..500)
        .map(|i| json!({"name": "Ada", "age": i - 250}))
        .collect();

    let parallel: Vec<_> = schema
        .validate_all(&inputs)
        .into_iter()
        .map(|r| r.into_result())
        .collect();
    let sequential: Vec<_> = inputs
        .iter()
        .map(|input| schema.validate(input).into_result())
        .collect();

    assert_eq!(parallel, sequential);
}
