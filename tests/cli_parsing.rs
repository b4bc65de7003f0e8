//! Tests for CLI option parsing.

use clap::Parser;
use domain_scout::{LogFormat, LogLevel, Opt};

#[test]
fn test_description_is_required() {
    assert!(Opt::try_parse_from(["domain_scout"]).is_err());
}

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["domain_scout", "an online bakery"]).unwrap();
    assert_eq!(opt.description, "an online bakery");
    assert!(opt.extensions.is_empty());
    assert_eq!(opt.keyword, None);
    assert_eq!(opt.count, None);
    assert_eq!(opt.timeout_seconds, 10);
    assert!(!opt.skip_availability);
    assert_eq!(
        log::LevelFilter::from(opt.log_level.clone()),
        log::LevelFilter::from(LogLevel::Info)
    );
    assert!(matches!(opt.log_format, LogFormat::Plain));
}

#[test]
fn test_extensions_are_comma_delimited() {
    let opt = Opt::try_parse_from([
        "domain_scout",
        "an online bakery",
        "--extensions",
        ".com,.co.id,.store",
    ])
    .unwrap();
    assert_eq!(opt.extensions, vec![".com", ".co.id", ".store"]);
}

#[test]
fn test_keyword_and_count() {
    let opt = Opt::try_parse_from([
        "domain_scout",
        "an online bakery",
        "--keyword",
        "cake",
        "--count",
        "5",
    ])
    .unwrap();
    assert_eq!(opt.keyword.as_deref(), Some("cake"));
    assert_eq!(opt.count, Some(5));
}

#[test]
fn test_flags_and_levels() {
    let opt = Opt::try_parse_from([
        "domain_scout",
        "an online bakery",
        "--skip-availability",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--timeout-seconds",
        "30",
    ])
    .unwrap();
    assert!(opt.skip_availability);
    assert_eq!(opt.timeout_seconds, 30);
    assert_eq!(
        log::LevelFilter::from(opt.log_level.clone()),
        log::LevelFilter::from(LogLevel::Debug)
    );
    assert!(matches!(opt.log_format, LogFormat::Json));
}
