//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{Config, MAX_LOCK_WAIT_SECONDS};
use super::validator::ConfigValidator;
use crate::operations::ListOrder;
use proptest::prelude::*;

fn list_order_strategy() -> impl Strategy<Value = ListOrder> {
    prop_oneof![Just(ListOrder::Chronological), Just(ListOrder::Insertion)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(0u64..=2 * MAX_LOCK_WAIT_SECONDS),
        prop::option::of(list_order_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(lock_wait, list_order, disable_autoinit)| Config {
            maximum_lock_wait_seconds: lock_wait,
            list_order,
            disable_autoinit,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(
            result.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(result.list_order, high.list_order.or(low.list_order));
        prop_assert_eq!(result.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
    }

    #[test]
    fn config_merge_with_default_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    #[test]
    fn config_yaml_roundtrip_preserves_values(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    #[test]
    fn config_validation_matches_lock_wait_range(config in config_strategy()) {
        let expected = config
            .maximum_lock_wait_seconds
            .map_or(true, |s| (1..=MAX_LOCK_WAIT_SECONDS).contains(&s));
        prop_assert_eq!(ConfigValidator::validate(&config).is_ok(), expected);
    }
}
