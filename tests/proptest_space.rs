use proptest::prelude::*;
use tira_lib::{InMemoryStore, Space, TiraError};

proptest! {
    #[test]
    fn prop_capital_names_are_valid_spaces(name in "[A-Z]{2,3}") {
        let space: Space = name.parse().expect("valid space");
        prop_assert_eq!(space.as_str(), name.as_str());
    }

    #[test]
    fn prop_other_names_are_rejected(name in "[A-Za-z0-9]{0,6}") {
        let valid = (2..=3).contains(&name.len()) && name.chars().all(|c| c.is_ascii_uppercase());
        let parsed = name.parse::<Space>();
        prop_assert_eq!(parsed.is_ok(), valid);
        if let Err(err) = parsed {
            let is_invalid_space = matches!(err, TiraError::InvalidSpace { .. });
            prop_assert!(is_invalid_space, "unexpected error: {:?}", err);
        }
    }

    #[test]
    fn prop_created_issue_is_found_by_bare_id(
        name in "[A-Z]{2,3}",
        descriptions in prop::collection::vec("[ -~]{0,40}", 1..8),
    ) {
        let space: Space = name.parse().expect("valid space");
        let mut store = InMemoryStore::new();
        for (index, description) in descriptions.iter().enumerate() {
            let issue = store.create(&space, description.clone()).expect("id available");
            prop_assert_eq!(&issue.key, &format!("{name}-{}", index + 1));

            let bare = (index + 1).to_string();
            let found = store.find(&bare, &space).expect("created issue");
            prop_assert_eq!(&found.description, description);
        }
        prop_assert_eq!(store.list(&space, "", |issue| issue.key.clone()).count(), descriptions.len());
    }
}
