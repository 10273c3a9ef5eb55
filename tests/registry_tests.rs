//! Integration tests for the target registry and crawl session

use std::time::Duration;

use crawl_targets::{
    CrawlSession, CrawlSettings, RegistryError, RunMode, Target, TargetList, TargetRegistry,
};

mod common;

#[test]
fn register_append_enumerate_end_to_end() -> anyhow::Result<()> {
    common::init_tracing();

    let mut registry = TargetRegistry::new();
    registry.add_target("https://example.com", Some("ex"), None, None)?;
    registry.add_path("ex", "//body/div")?;

    assert_eq!(registry.target_names(), ["ex"]);
    let target = registry.get("ex").expect("target was just registered");
    assert_eq!(target.url(), "https://example.com");
    assert_eq!(target.paths(), ["//body/div"]);
    Ok(())
}

#[test]
fn add_target_with_all_options() -> anyhow::Result<()> {
    let mut registry = TargetRegistry::new();
    let seed = vec!["//h1".to_owned(), "//p".to_owned()];
    registry.add_target(
        "https://example.com/news",
        Some("news"),
        Some("news.csv"),
        Some(&seed),
    )?;

    let target = registry.get("news").expect("registered above");
    assert_eq!(target.name(), Some("news"));
    assert_eq!(target.file_name(), Some("news.csv"));
    assert_eq!(target.paths(), ["//h1", "//p"]);
    assert_eq!(target.address().path(), "/news");
    Ok(())
}

#[test]
fn duplicate_key_is_rejected_and_registry_is_unchanged() {
    let mut registry = TargetRegistry::new();
    registry
        .add_target("https://x.com", Some("x"), None, None)
        .unwrap();

    let err = registry
        .add_target("https://y.com", Some("x"), None, None)
        .unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateKey { .. }));
    assert_eq!(registry.target_names(), ["x"]);
    assert_eq!(registry.get("x").unwrap().url(), "https://x.com");
}

#[test]
fn wrong_scheme_propagates_as_invalid_url() {
    let mut registry = TargetRegistry::new();
    let err = registry
        .add_target("ftp://example.com", None, None, None)
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::InvalidUrl {
            url: "ftp://example.com".to_owned()
        }
    );
    assert!(registry.is_empty());
}

#[test]
fn add_path_on_unregistered_key_fails() {
    let mut registry = TargetRegistry::new();
    let err = registry.add_path("missing-key", "p").unwrap_err();
    assert_eq!(err.key(), Some("missing-key"));
}

#[test]
fn enumeration_preserves_insertion_order() -> anyhow::Result<()> {
    let mut registry = TargetRegistry::new();
    registry.add_target("https://c.com", Some("c"), None, None)?;
    registry.add_target("https://a.com", Some("a"), None, None)?;
    registry.add_target("https://b.com", None, None, None)?;

    assert_eq!(registry.target_names(), ["c", "a", "https://b.com"]);

    let urls: Vec<_> = registry.targets().map(Target::url).collect();
    assert_eq!(urls, ["https://c.com", "https://a.com", "https://b.com"]);
    Ok(())
}

#[test]
fn named_list_registers_as_a_batch() -> anyhow::Result<()> {
    common::init_tracing();

    let mut list = TargetList::new("morning-run");
    let mut a = Target::new("https://a.com")?;
    a.set_name("a");
    list.push(a);
    list.push(Target::with_path("https://b.com", "//table")?);

    let mut registry = TargetRegistry::new();
    registry.add_list(list)?;

    assert_eq!(registry.target_names(), ["a", "https://b.com"]);
    assert_eq!(registry.get("https://b.com").unwrap().paths(), ["//table"]);
    Ok(())
}

#[test]
fn colliding_list_leaves_registry_untouched() -> anyhow::Result<()> {
    let mut registry = TargetRegistry::new();
    registry.add_target("https://a.com", Some("a"), None, None)?;

    let mut colliding = Target::new("https://z.com")?;
    colliding.set_name("a");
    let list = TargetList::with_targets(
        "batch",
        vec![Target::new("https://fresh.com")?, colliding],
    );

    assert!(registry.add_list(list).is_err());
    assert_eq!(registry.target_names(), ["a"]);
    Ok(())
}

#[test]
fn session_carries_explicit_settings() {
    let settings = CrawlSettings::new(RunMode::MultiList, Duration::from_secs(120));
    let session = CrawlSession::with_settings(settings);

    assert_eq!(session.settings().run_mode(), RunMode::MultiList);
    assert_eq!(session.settings().exec_period(), Duration::from_secs(120));
    assert!(!session.settings().is_one_shot());
}

#[test]
fn session_default_settings_match_the_documented_defaults() {
    let session = CrawlSession::new();
    assert_eq!(session.settings().run_mode(), RunMode::AllLists);
    assert_eq!(session.settings().exec_period(), Duration::ZERO);
}

#[test]
fn registry_serde_round_trip_keeps_keys_and_paths() -> anyhow::Result<()> {
    let mut registry = TargetRegistry::new();
    registry.add_target("https://example.com", Some("ex"), Some("out.csv"), None)?;
    registry.add_path("ex", "//body")?;

    let json = serde_json::to_string(&registry)?;
    let back: TargetRegistry = serde_json::from_str(&json)?;

    assert_eq!(back.target_names(), ["ex"]);
    let target = back.get("ex").expect("key survives the round trip");
    assert_eq!(target.file_name(), Some("out.csv"));
    assert_eq!(target.paths(), ["//body"]);
    assert_eq!(target.address().host_str(), Some("example.com"));
    Ok(())
}
