//! End-to-end fixture tests
//!
//! Drive the engine from JSON descriptions through to replayed stub bodies.

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::domain::entities::{SearchOptions, TweetAttributes};
    use crate::domain::ports::HttpMethod;
    use crate::error::FixtureError;
    use crate::test_utils::test_engine;

    fn options(value: Value) -> SearchOptions {
        SearchOptions::try_from(value).unwrap()
    }

    #[test]
    fn rotation_replays_distinct_bodies_in_order() {
        let (mut fake, stub) = test_engine();
        let url = fake
            .register_searches(
                "rust",
                vec![
                    options(json!({"results": []})),
                    options(json!({"results": [{"text": "foo bar"}]})),
                ],
            )
            .unwrap();

        let first: Value =
            serde_json::from_str(&stub.respond(HttpMethod::Get, &url).unwrap().unwrap().body)
                .unwrap();
        let second: Value =
            serde_json::from_str(&stub.respond(HttpMethod::Get, &url).unwrap().unwrap().body)
                .unwrap();
        let third: Value =
            serde_json::from_str(&stub.respond(HttpMethod::Get, &url).unwrap().unwrap().body)
                .unwrap();

        assert_eq!(first["results"], json!([]));
        assert_eq!(first["max_id"], json!(-1));
        assert_eq!(second["results"][0]["text"], json!("foo bar"));
        assert_eq!(second["max_id"], json!(1));
        assert_eq!(third, second);
    }

    #[test]
    fn invalid_description_leaves_state_untouched() {
        let (mut fake, stub) = test_engine();

        let err = SearchOptions::try_from(json!({
            "results": [{"text": "fine"}, {"created_at": "last tuesday"}]
        }))
        .unwrap_err();
        assert!(matches!(err, FixtureError::InvalidFieldType { .. }));

        assert!(stub.is_empty().unwrap());
        assert_eq!(fake.new_tweet(TweetAttributes::new()).id, 1);
    }

    #[test]
    fn auto_ids_count_from_one_per_engine() {
        let (mut fake, _stub) = test_engine();
        let ids: Vec<i64> = (0..10)
            .map(|_| fake.new_tweet(TweetAttributes::new()).id)
            .collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());

        let (mut other, _stub) = test_engine();
        assert_eq!(other.new_tweet(TweetAttributes::new()).id, 1);
    }

    #[test]
    fn at_prefixed_and_plain_names_share_identity() {
        let (mut fake, _stub) = test_engine();
        let plain = fake.new_tweet(TweetAttributes::try_from(json!({"fromUser": "x"})).unwrap());
        let prefixed =
            fake.new_tweet(TweetAttributes::try_from(json!({"from_user": "@x"})).unwrap());

        assert_eq!(prefixed.from_user.as_deref(), Some("x"));
        assert_eq!(prefixed.from_user_id, plain.from_user_id);
    }

    #[test]
    fn records_from_user_most_recent_first() {
        let (mut fake, _stub) = test_engine();
        fake.new_tweet(TweetAttributes::new().from_user("ben").text("hello"));
        fake.new_tweet(TweetAttributes::new().from_user("ben").text("goodbye"));
        fake.new_tweet(TweetAttributes::new().from_user("someone_else").text("hi"));

        let texts: Vec<_> = fake
            .tweets_from("ben")
            .into_iter()
            .filter_map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["goodbye", "hello"]);
    }

    #[test]
    fn reset_matches_a_fresh_engine() {
        let (mut fake, stub) = test_engine();
        fake.register_search("foo", options(json!({"results": [{"from_user": "a"}]})))
            .unwrap();
        fake.new_tweet(TweetAttributes::new().from_user("b"));

        fake.reset().unwrap();

        assert!(stub.is_empty().unwrap());
        let tweet = fake.new_tweet(TweetAttributes::new().from_user("fresh"));
        assert_eq!(tweet.id, 1);
        assert_eq!(tweet.from_user_id, Some(1));
    }

    #[test]
    fn passthrough_fields_reach_the_wire() {
        let (mut fake, stub) = test_engine();
        let url = fake
            .register_search(
                "foo",
                options(json!({
                    "next_page": "?page=2&q=foo",
                    "results": [{"geo": null, "text": "with geo"}]
                })),
            )
            .unwrap();

        let body: Value =
            serde_json::from_str(&stub.respond(HttpMethod::Get, &url).unwrap().unwrap().body)
                .unwrap();
        assert_eq!(body["next_page"], json!("?page=2&q=foo"));
        assert_eq!(body["results"][0]["geo"], Value::Null);
        assert!(body["results"][0].as_object().unwrap().contains_key("geo"));
    }
}
