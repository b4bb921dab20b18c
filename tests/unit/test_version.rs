// Unit tests for the public version API

use buildver::{FieldRole, Version, VersionError};

#[test]
fn test_accept_and_reject_table() {
    let cases = [
        ("version string missing", "", true),
        ("version string valid", "v1.0.0", false),
        ("version prefix missing", "1.0.0", true),
        ("patch version missing", "v1.0", true),
        ("two fields only", "v1.10", true),
        ("empty minor version", "v2..12", true),
        ("empty patch version", "v2.2..", true),
        ("missing all versions but prefix", "v", true),
        ("four fields", "v1.2.3.4", true),
    ];

    for (desc, input, want_err) in cases {
        assert_eq!(Version::parse(input).is_err(), want_err, "{desc}: {input:?}");
    }
}

#[test]
fn test_error_kind_per_failure() {
    assert_eq!("".parse::<Version>(), Err(VersionError::Empty));
    assert!(matches!(
        "x1.2.3".parse::<Version>(),
        Err(VersionError::InvalidPrefix { found: 'x' })
    ));
    assert!(matches!(
        "v1.2".parse::<Version>(),
        Err(VersionError::Malformed { fields: 2, .. })
    ));
    assert_eq!(
        "v1..3".parse::<Version>(),
        Err(VersionError::EmptyField(FieldRole::Minor))
    );
    assert!(matches!(
        "v1.2.three".parse::<Version>(),
        Err(VersionError::InvalidInteger { role: FieldRole::Patch, .. })
    ));
}

#[test]
fn test_first_failing_field_wins() {
    // both minor and patch are bad; minor is reported
    assert_eq!(
        Version::parse("v1..x"),
        Err(VersionError::EmptyField(FieldRole::Minor))
    );
    let err = Version::parse("va.b.c").unwrap_err();
    assert_eq!(err.role(), Some(FieldRole::Major));
}

#[test]
fn test_round_trip_over_grid() {
    let values = [0, 1, 9, 10, 255, 65_536, u64::from(u32::MAX) + 1];
    for &major in &values {
        for &minor in &values {
            let version = Version::new(major, minor, major ^ minor);
            let text = version.to_string();
            assert!(text.starts_with('v'));
            assert_eq!(Version::parse(&text), Ok(version));
        }
    }
}

#[test]
fn test_try_from_conversions() {
    let from_str = Version::try_from("v7.8.9").unwrap();
    let from_string = Version::try_from(String::from("v7.8.9")).unwrap();
    assert_eq!(from_str, from_string);
    assert_eq!(String::from(from_str), "v7.8.9");
}

#[test]
fn test_version_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Version>();
    assert_send_sync::<VersionError>();

    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || Version::parse(&format!("v{i}.0.1"))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(Version::new(i as u64, 0, 1)));
    }
}
