mod support;

mod tests {
    use core::cell::Cell;

    use anavi_word_clock::{
        BrightnessPolicy, ClockConfig, ClockIntent, ClockIntentChannel, IntentProcessor,
        StatusKind, TimeSample, Word, WordClock,
    };

    use crate::support::{engine, lit_bits};

    const QUARTER_PAST_NINE: TimeSample = TimeSample { hour: 9, minute: 17 };

    fn quarter_past_nine() -> TimeSample {
        QUARTER_PAST_NINE
    }

    #[test]
    fn test_tick_renders_current_time() {
        let channel = ClockIntentChannel::<4>::new();
        let mut clock = WordClock::new(engine(), quarter_past_nine, channel.receiver());

        assert_eq!(clock.tick(), QUARTER_PAST_NINE);

        let output = clock.engine().output();
        assert_eq!(output.frames.len(), 1);
        assert_eq!(
            lit_bits(&output.frames[0]),
            Word::Quarter.mask() | Word::Past.mask() | Word::Nine.mask()
        );
        assert_eq!(output.brightness, [40]);
    }

    #[test]
    fn test_tick_pulls_a_fresh_sample() {
        let channel = ClockIntentChannel::<4>::new();
        let minute = Cell::new(0u8);
        let source = || {
            let sample = TimeSample {
                hour: 22,
                minute: minute.get(),
            };
            minute.set(minute.get() + 30);
            sample
        };
        let mut clock = WordClock::new(engine(), source, channel.receiver());

        clock.tick();
        clock.tick();

        let output = clock.engine().output();
        assert_eq!(lit_bits(&output.frames[0]), Word::Ten.mask());
        assert_eq!(
            lit_bits(&output.frames[1]),
            Word::Half.mask() | Word::Past.mask() | Word::Ten.mask()
        );
    }

    #[test]
    fn test_start_flashes_every_word() {
        let channel = ClockIntentChannel::<4>::new();
        let mut clock = WordClock::new(engine(), quarter_past_nine, channel.receiver());

        clock.start();
        assert_eq!(clock.engine().output().frames.len(), 21);
    }

    #[test]
    fn test_status_intent_renders_before_time() {
        let channel = ClockIntentChannel::<4>::new();
        let sender = channel.sender();
        let mut clock = WordClock::new(engine(), quarter_past_nine, channel.receiver());

        sender.try_send(ClockIntent::ShowStatus(StatusKind::Wifi)).unwrap();
        sender
            .try_send(ClockIntent::ShowStatus(StatusKind::HomeAssistant))
            .unwrap();
        clock.tick();

        let frames = &clock.engine().output().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(lit_bits(&frames[0]), Word::HomeAssistant.mask());
        assert!(channel.is_empty());
    }

    #[test]
    fn test_flash_intent_replays_startup() {
        let channel = ClockIntentChannel::<4>::new();
        let mut clock = WordClock::new(engine(), quarter_past_nine, channel.receiver());

        channel.try_send(ClockIntent::FlashWords).unwrap();
        clock.tick();

        assert_eq!(clock.engine().output().frames.len(), 22);
    }

    #[test]
    fn test_brightness_policy_intent() {
        let channel = ClockIntentChannel::<4>::new();
        let mut clock = WordClock::new(engine(), quarter_past_nine, channel.receiver());

        let policy = BrightnessPolicy {
            day: 255,
            ..BrightnessPolicy::DEFAULT
        };
        channel
            .try_send(ClockIntent::SetBrightnessPolicy(policy))
            .unwrap();
        clock.tick();

        assert_eq!(clock.engine().brightness(), Some(255));
        assert_eq!(clock.engine().config().brightness, policy);
        assert_ne!(*clock.engine().config(), ClockConfig::DEFAULT);
    }

    #[test]
    fn test_empty_channel_has_no_effects() {
        let channel = ClockIntentChannel::<4>::new();
        let mut processor = IntentProcessor::new(channel.receiver());

        assert!(!processor.process_pending().has_effects());

        channel.try_send(ClockIntent::FlashWords).unwrap();
        let effects = processor.process_pending();
        assert!(effects.has_effects());
        assert!(effects.flash_words);
        assert_eq!(effects.status, None);

        assert!(!processor.process_pending().has_effects());
    }

    #[test]
    fn test_tick_without_intents_keeps_policy() {
        let channel = ClockIntentChannel::<4>::new();
        let mut clock = WordClock::new(engine(), quarter_past_nine, channel.receiver());

        clock.tick();
        clock.tick();

        assert_eq!(clock.engine().output().frames.len(), 2);
        assert_eq!(*clock.engine().config(), ClockConfig::DEFAULT);
    }

    #[test]
    fn test_full_channel_rejects_intent() {
        let channel = ClockIntentChannel::<1>::new();
        channel.try_send(ClockIntent::FlashWords).unwrap();
        assert!(channel.try_send(ClockIntent::FlashWords).is_err());
        assert_eq!(channel.len(), 1);
    }

    #[test]
    fn test_invalid_sample_keeps_animating() {
        let channel = ClockIntentChannel::<4>::new();
        let mut clock = WordClock::new(
            engine(),
            || TimeSample { hour: 99, minute: 99 },
            channel.receiver(),
        );

        clock.tick();
        clock.tick();

        assert_eq!(clock.engine().color_phase(), 2);
        assert_eq!(lit_bits(&clock.engine().output().frames[1]), 0);
    }
}
