use fixture::{
    generate, generate_with, validate_bundle, FixedClock, FixtureError, FixtureLimits,
    SystemClock, TimeSource, DESCRIPTION, FIXTURE_NAME, FIXTURE_VERSION,
};

#[test]
fn integration_two_calls_differ_only_in_timestamps() {
    let first = generate(10).unwrap();
    let second = generate(10).unwrap();

    assert_eq!(first.name, second.name);
    assert_eq!(first.version, second.version);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.records().iter().zip(second.records()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.name, b.name);
        assert_eq!(a.description, b.description);
    }
}

#[test]
fn integration_fixed_clock_is_fully_deterministic() {
    let clock = FixedClock::new("2026-10-19T12:00:00.000Z");
    let limits = FixtureLimits::default();
    let first = generate_with(10, &limits, &clock).unwrap();
    let second = generate_with(10, &limits, &clock).unwrap();
    assert_eq!(first, second);
}

#[test]
fn integration_system_clock_bundle_validates() {
    let bundle = generate_with(10, &FixtureLimits::default(), &SystemClock).unwrap();
    validate_bundle(&bundle).unwrap();

    let created = &bundle.data[0].metadata.created;
    assert!(created.is_valid());
    assert!(bundle
        .records()
        .iter()
        .all(|record| record.metadata.created == *created));
}

#[test]
fn integration_dyn_time_source() {
    let clock: Box<dyn TimeSource> = Box::new(FixedClock::new("2026-10-19T12:00:00.000Z"));
    let bundle = generate_with(2, &FixtureLimits::for_testing(), clock.as_ref()).unwrap();
    assert_eq!(
        bundle.data[1].metadata.modified.as_str(),
        "2026-10-19T12:00:00.000Z"
    );
}

#[test]
fn integration_errors_fail_fast() {
    assert_eq!(
        generate(-1).unwrap_err(),
        FixtureError::InvalidArgument { count: -1 }
    );
    assert!(matches!(
        generate_with(1_000, &FixtureLimits::for_testing(), &SystemClock),
        Err(FixtureError::LimitsExceeded { .. })
    ));
}

#[test]
fn integration_generate_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| generate(10)))
        .collect();
    for handle in handles {
        let bundle = handle.join().unwrap().unwrap();
        assert_eq!(bundle.len(), 10);
        assert_eq!(bundle.name, FIXTURE_NAME);
        assert_eq!(bundle.version, FIXTURE_VERSION);
        assert!(bundle.records().iter().all(|r| r.description == DESCRIPTION));
    }
}
