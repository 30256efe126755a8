mod tests {
    use anavi_word_clock::{BrightnessPolicy, DayPeriod};

    const POLICY: BrightnessPolicy = BrightnessPolicy::DEFAULT;

    #[test]
    fn test_cutoff_hours_belong_to_day() {
        assert_eq!(POLICY.level_for(POLICY.morning_cutoff), POLICY.day);
        assert_eq!(POLICY.level_for(POLICY.night_cutoff), POLICY.day);
    }

    #[test]
    fn test_hours_outside_cutoffs_are_night() {
        assert_eq!(POLICY.level_for(POLICY.morning_cutoff - 1), POLICY.night);
        assert_eq!(POLICY.level_for(POLICY.night_cutoff + 1), POLICY.night);
        assert_eq!(POLICY.period(0), DayPeriod::Night);
        assert_eq!(POLICY.period(23), DayPeriod::Night);
    }

    #[test]
    fn test_default_levels() {
        assert_eq!(POLICY.level_for(6), 20);
        assert_eq!(POLICY.level_for(7), 40);
        assert_eq!(POLICY.level_for(22), 40);
        assert_eq!(POLICY.level_for(23), 20);
        assert_eq!(BrightnessPolicy::default(), POLICY);
    }

    #[test]
    fn test_custom_policy() {
        let policy = BrightnessPolicy {
            day: 200,
            night: 5,
            morning_cutoff: 6,
            night_cutoff: 20,
        };
        let day_hours = (0..24).filter(|&hour| policy.period(hour) == DayPeriod::Day);
        assert_eq!(day_hours.count(), 15);
        assert_eq!(policy.level_for(21), 5);
        assert_eq!(policy.level_for(6), 200);
    }
}
