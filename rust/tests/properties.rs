use crate::calendars::{nd, Cal, DateRoll};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

const DAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650).prop_map(|n| nd(2010, 1, 1) + Days::new(n))
}

fn any_cal() -> impl Strategy<Value = Cal> {
    (
        proptest::sample::subsequence(DAY_NAMES.to_vec(), 1..=7),
        proptest::collection::vec(any_date(), 0..40),
    )
        .prop_map(|(days, holidays)| Cal::try_new(days, holidays).unwrap())
}

proptest! {
    #[test]
    fn rolled_dates_are_business_days(cal in any_cal(), date in any_date()) {
        let forward = cal.roll_forward_bus_day(&date);
        let backward = cal.roll_backward_bus_day(&date);
        prop_assert!(cal.is_bus_day(&forward));
        prop_assert!(cal.is_bus_day(&backward));
        prop_assert!(forward >= date);
        prop_assert!(backward <= date);
        if cal.is_bus_day(&date) {
            prop_assert_eq!(forward, date);
            prop_assert_eq!(backward, date);
        }
    }

    #[test]
    fn next_and_previous_are_strict(cal in any_cal(), date in any_date()) {
        let next = cal.next_bus_day(&date);
        let previous = cal.previous_bus_day(&date);
        prop_assert!(next > date);
        prop_assert!(previous < date);
        prop_assert!(cal.is_bus_day(&next));
        prop_assert!(cal.is_bus_day(&previous));
    }

    #[test]
    fn add_bus_days_counts_steps(cal in any_cal(), date in any_date(), n in 0u32..30) {
        let start = cal.roll_forward_bus_day(&date);
        let end = cal.add_bus_days(&date, n);
        prop_assert!(cal.is_bus_day(&end));
        prop_assert_eq!(cal.bus_days_between(&start, &end), n as usize);
    }

    #[test]
    fn sub_bus_days_counts_steps(cal in any_cal(), date in any_date(), n in 0u32..30) {
        let start = cal.roll_backward_bus_day(&date);
        let end = cal.sub_bus_days(&date, n);
        prop_assert!(cal.is_bus_day(&end));
        prop_assert_eq!(cal.bus_days_between(&end, &start), n as usize);
    }

    #[test]
    fn add_then_sub_from_business_day(cal in any_cal(), date in any_date(), n in 0u32..30) {
        let start = cal.roll_forward_bus_day(&date);
        prop_assert_eq!(cal.sub_bus_days(&cal.add_bus_days(&start, n), n), start);
    }

    #[test]
    fn range_is_half_open(cal in any_cal(), a in any_date(), b in any_date()) {
        let dates: Vec<NaiveDate> = cal.bus_date_range(&a, &b).collect();
        prop_assert_eq!(dates.len(), cal.bus_days_between(&a, &b));
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(dates.iter().all(|d| *d >= a && *d < b && cal.is_bus_day(d)));
        if b <= a {
            prop_assert!(dates.is_empty());
        }
    }

    #[test]
    fn between_is_additive(cal in any_cal(), a in any_date(), x in 0u64..200, y in 0u64..200) {
        let b = a + Days::new(x);
        let c = b + Days::new(y);
        prop_assert_eq!(
            cal.bus_days_between(&a, &c),
            cal.bus_days_between(&a, &b) + cal.bus_days_between(&b, &c)
        );
    }

    #[test]
    fn add_one_more_is_next(cal in any_cal(), date in any_date(), n in 0u32..30) {
        prop_assert_eq!(
            cal.add_bus_days(&date, n + 1),
            cal.next_bus_day(&cal.add_bus_days(&date, n))
        );
        prop_assert_eq!(
            cal.sub_bus_days(&date, n + 1),
            cal.previous_bus_day(&cal.sub_bus_days(&date, n))
        );
    }

    #[test]
    fn business_day_is_working_and_not_holiday(cal in any_cal(), date in any_date()) {
        let expected = cal.is_working_day(&date) && !cal.is_holiday(&date);
        prop_assert_eq!(cal.is_bus_day(&date), expected);
        prop_assert_eq!(cal.is_business_day(date).unwrap(), expected);
        prop_assert_eq!(cal.is_non_bus_day(&date), !expected);
    }

    #[test]
    fn rolling_is_idempotent(cal in any_cal(), date in any_date()) {
        let forward = cal.roll_forward_bus_day(&date);
        let backward = cal.roll_backward_bus_day(&date);
        prop_assert_eq!(cal.roll_forward_bus_day(&forward), forward);
        prop_assert_eq!(cal.roll_backward_bus_day(&backward), backward);
    }
}
