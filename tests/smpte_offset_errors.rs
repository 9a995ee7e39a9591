use midix_event::prelude::*;

const ALL_FPS: [SmpteFps; 4] = [
    SmpteFps::TwentyFour,
    SmpteFps::TwentyFive,
    SmpteFps::TwentyNine,
    SmpteFps::Thirty,
];

#[test]
fn test_smpte_offset_invalid_hour() {
    // Hours should be 0-23, test 24
    let result = SmpteOffset::new(SmpteFps::TwentyFour, 24, 0, 0, 0, 0);
    assert!(matches!(result, Err(SmpteError::HourOffset(24))));

    // Test maximum invalid hour that fits the 5 hour bits
    let result = SmpteOffset::new(SmpteFps::TwentyFour, 31, 0, 0, 0, 0);
    assert!(matches!(result, Err(SmpteError::HourOffset(31))));
}

#[test]
fn test_smpte_offset_invalid_minute() {
    let result = SmpteOffset::new(SmpteFps::TwentyFour, 12, 60, 30, 15, 50);
    assert!(matches!(result, Err(SmpteError::MinuteOffset(60))));

    for invalid_minute in [61, 70, 80, 99, 100, 255] {
        let result = SmpteOffset::new(SmpteFps::TwentyFour, 12, invalid_minute, 30, 15, 50);
        assert!(matches!(result, Err(SmpteError::MinuteOffset(_))));
    }
}

#[test]
fn test_smpte_offset_invalid_second() {
    let result = SmpteOffset::new(SmpteFps::TwentyFive, 12, 30, 60, 15, 50);
    assert!(matches!(result, Err(SmpteError::SecondOffset(60))));

    let result = SmpteOffset::new(SmpteFps::TwentyFive, 12, 30, 255, 15, 50);
    assert!(matches!(result, Err(SmpteError::SecondOffset(255))));
}

#[test]
fn test_smpte_offset_invalid_subframe() {
    let result = SmpteOffset::new(SmpteFps::TwentyNine, 12, 30, 45, 15, 100);
    assert!(matches!(result, Err(SmpteError::Subframe(100))));

    for invalid_subframe in [101, 110, 150, 200, 255] {
        let result = SmpteOffset::new(SmpteFps::TwentyNine, 12, 30, 45, 15, invalid_subframe);
        assert!(matches!(result, Err(SmpteError::Subframe(_))));
    }
}

#[test]
fn test_smpte_offset_boundary_values() {
    let test_cases = [
        // Min values
        (SmpteFps::TwentyFour, 0, 0, 0, 0, 0),
        // Max hour
        (SmpteFps::TwentyFour, 23, 0, 0, 0, 0),
        // Max minute
        (SmpteFps::TwentyFour, 0, 59, 0, 0, 0),
        // Max second
        (SmpteFps::TwentyFour, 0, 0, 59, 0, 0),
        // Max subframe
        (SmpteFps::TwentyFour, 0, 0, 0, 0, 99),
        // All max valid values for each rate
        (SmpteFps::TwentyFour, 23, 59, 59, 23, 99),
        (SmpteFps::TwentyFive, 23, 59, 59, 24, 99),
        (SmpteFps::TwentyNine, 23, 59, 59, 29, 99),
        (SmpteFps::Thirty, 23, 59, 59, 29, 99),
    ];

    for (fps, hour, minute, second, frame, subframe) in test_cases {
        let offset = SmpteOffset::new(fps, hour, minute, second, frame, subframe)
            .unwrap_or_else(|e| panic!("Failed for {fps} {hour}:{minute}:{second}:{frame}: {e}"));
        assert_eq!(offset.fps(), fps);
        assert_eq!(offset.hour(), hour);
        assert_eq!(offset.minute(), minute);
        assert_eq!(offset.second(), second);
        assert_eq!(offset.frame(), frame);
        assert_eq!(offset.subframe(), subframe);
    }
}

#[test]
fn test_smpte_offset_frame_limits() {
    for fps in ALL_FPS {
        let last = fps.as_division() - 1;
        assert!(SmpteOffset::new(fps, 12, 30, 45, last, 50).is_ok());

        let result = SmpteOffset::new(fps, 12, 30, 45, last + 1, 50);
        assert_eq!(
            result,
            Err(SmpteError::Frame {
                frame: last + 1,
                fps: fps.as_division()
            })
        );
    }
}

#[test]
fn test_smpte_offset_microsecond_calculation_edge_cases() {
    // Just before midnight
    let offset = SmpteOffset::new(SmpteFps::TwentyFour, 23, 59, 59, 23, 99).unwrap();

    let micros = offset.as_micros();
    let expected = 86_399_000_000.0 + // 23:59:59
                   (23.0 / 24.0) * 1_000_000.0 + // 23 frames at 24fps
                   (99.0 / 100.0 / 24.0) * 1_000_000.0; // 99 subframes
    assert!((micros - expected).abs() < 1.0);

    // Exactly midnight
    let midnight = SmpteOffset::new(SmpteFps::TwentyFive, 0, 0, 0, 0, 0).unwrap();
    assert_eq!(midnight.as_micros(), 0.0);
}

#[test]
fn test_smpte_offset_combined_errors() {
    // Invalid hour AND minute: hour is checked first
    let result = SmpteOffset::new(SmpteFps::TwentyFour, 25, 61, 30, 15, 50);
    assert!(matches!(result, Err(SmpteError::HourOffset(25))));

    // Invalid minute AND second
    let result = SmpteOffset::new(SmpteFps::TwentyFive, 23, 60, 60, 15, 50);
    assert!(matches!(result, Err(SmpteError::MinuteOffset(60))));

    // Invalid frame AND subframe
    let result = SmpteOffset::new(SmpteFps::TwentyFour, 23, 59, 59, 24, 100);
    assert!(matches!(result, Err(SmpteError::Frame { frame: 24, .. })));

    // Everything valid except subframe
    let result = SmpteOffset::new(SmpteFps::TwentyNine, 23, 59, 59, 29, 100);
    assert!(matches!(result, Err(SmpteError::Subframe(100))));
}

#[test]
fn test_smpte_errors_convert_to_value_errors() {
    let err: ValueError = SmpteOffset::new(SmpteFps::Thirty, 24, 0, 0, 0, 0)
        .unwrap_err()
        .into();
    assert_eq!(err, ValueError::Smpte(SmpteError::HourOffset(24)));
}

#[test]
fn test_smpte_drop_frame_precision() {
    // One frame at 29.97fps
    let offset = SmpteOffset::new(SmpteFps::TwentyNine, 0, 0, 0, 1, 0).unwrap();

    let micros = offset.as_micros();
    let expected = 1_000_000.0 / 29.97;
    assert!((micros - expected).abs() < 0.1);

    // One frame is 1001/30000 seconds
    let exact_frame_duration = 1_001_000.0 / 30.0;
    assert!((micros - exact_frame_duration).abs() < 0.001);
}
