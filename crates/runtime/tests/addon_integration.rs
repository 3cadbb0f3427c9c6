use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use rate_core::{ExpAward, ExpSubject, SubjectView};
use rate_runtime::{AddonConfig, DynamicRate, HookRegistry};
use tempfile::TempDir;

fn write_rates(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Dispatches one award and returns every amount the original logic saw.
fn award(registry: &HookRegistry, subject: SubjectView, award: ExpAward) -> Vec<f64> {
    let mut seen = Vec::new();
    registry.dispatch(&subject, award, |_: &dyn ExpSubject, forwarded: ExpAward| {
        seen.push(forwarded.amount)
    });
    seen
}

#[test]
fn test_award_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let rates = write_rates(
        temp_dir.path(),
        "dynamic_rate.json",
        r#"[
            { "lv": 10, "default_exp_rate": 3.0, "premium_exp_rate": 5.0 },
            { "lv": 70, "default_exp_rate": 9.0 }
        ]"#,
    );

    let addon = DynamicRate::new();
    let snapshot = addon.configure(&AddonConfig::activated(&rates).with_base_rates(2.0, 4.0));
    assert!(snapshot.is_activated());
    assert_eq!(snapshot.version, 1);
    // lv 70 is above the default cap of 65
    assert_eq!(snapshot.table.len(), 1);

    let mut registry = HookRegistry::new();
    addon.load(&mut registry);
    assert!(registry.contains(DynamicRate::NAME));

    // (1000 / 2.0) * 3.0
    assert_eq!(
        award(&registry, SubjectView::new(10, false), ExpAward::new(1000.0)),
        vec![1500.0]
    );
    // (1000 / 4.0) * 5.0
    assert_eq!(
        award(&registry, SubjectView::new(10, true), ExpAward::new(1000.0)),
        vec![1250.0]
    );
    // no record: normalized only
    assert_eq!(
        award(&registry, SubjectView::new(11, false), ExpAward::new(1000.0)),
        vec![500.0]
    );
    // at the cap
    assert_eq!(
        award(&registry, SubjectView::new(65, false), ExpAward::new(1000.0)),
        vec![0.0]
    );
    // rewards pass through
    assert_eq!(
        award(
            &registry,
            SubjectView::new(10, false),
            ExpAward::new(1000.0).with_reward(true)
        ),
        vec![1000.0]
    );

    assert!(addon.unload(&mut registry));
    assert!(registry.is_empty());
    assert_eq!(
        award(&registry, SubjectView::new(10, false), ExpAward::new(1000.0)),
        vec![1000.0]
    );
}

#[test]
fn test_missing_rate_file_force_disables() {
    let temp_dir = TempDir::new().unwrap();
    let addon = DynamicRate::new();

    let snapshot = addon.configure(&AddonConfig::activated(temp_dir.path().join("absent.json")));

    assert!(!snapshot.is_activated());
    assert!(!addon.is_activated());
    assert!(snapshot.table.is_empty());

    let mut registry = HookRegistry::new();
    addon.load(&mut registry);
    assert_eq!(
        award(&registry, SubjectView::new(80, false), ExpAward::new(42.0)),
        vec![42.0]
    );
}

#[test]
fn test_corrupted_rate_file_force_disables() {
    let temp_dir = TempDir::new().unwrap();
    let rates = write_rates(temp_dir.path(), "dynamic_rate.json", "{ broken");

    let addon = DynamicRate::new();
    let snapshot = addon.configure(&AddonConfig::activated(&rates));

    assert!(!snapshot.is_activated());
    assert!(snapshot.table.is_empty());
}

#[test]
fn test_reconfigure_rereads_rate_file() {
    let temp_dir = TempDir::new().unwrap();
    let rates = write_rates(
        temp_dir.path(),
        "dynamic_rate.json",
        r#"[{ "lv": 5, "default_exp_rate": 2.0 }]"#,
    );

    let addon = DynamicRate::new();
    assert!(addon.reconfigure().is_none());

    addon.configure(&AddonConfig::activated(&rates));
    assert_eq!(addon.snapshot().table.lookup(5, false), 2.0);

    write_rates(
        temp_dir.path(),
        "dynamic_rate.json",
        r#"[{ "lv": 5, "default_exp_rate": 4.0 }]"#,
    );
    let snapshot = addon.reconfigure().unwrap();

    assert_eq!(snapshot.version, 2);
    assert_eq!(snapshot.table.lookup(5, false), 4.0);
    assert_eq!(addon.config().unwrap().config_path, rates);
}

#[test]
fn test_configure_from_host_node() {
    let temp_dir = TempDir::new().unwrap();
    let rates = write_rates(
        temp_dir.path(),
        "dynamic_rate.json",
        r#"[{ "lv": 3, "default_exp_rate": 1.5 }]"#,
    );

    let node = serde_json::json!({
        "activated": true,
        "flush_logs": false,
        "config_path": rates,
        "max_lv": 30,
    });

    let addon = DynamicRate::new();
    let snapshot = addon.configure_from_node(&node).unwrap();

    assert!(snapshot.is_activated());
    assert_eq!(snapshot.config.max_level, 30);
    assert_eq!(snapshot.table.lookup(3, true), 1.5);

    assert!(addon.configure_from_node(&serde_json::json!({ "max_lv": "high" })).is_err());
}

#[test]
fn test_disabled_addon_ignores_rate_file() {
    let addon = DynamicRate::new();
    let snapshot = addon.configure(&AddonConfig::default());

    assert!(!snapshot.is_activated());
    assert_eq!(snapshot.config.max_level, 65);
}

#[test]
fn test_readers_never_see_mixed_snapshots() {
    let temp_dir = TempDir::new().unwrap();
    let rates_a = write_rates(
        temp_dir.path(),
        "a.json",
        r#"[{ "lv": 10, "default_exp_rate": 2.0 }]"#,
    );
    let rates_b = write_rates(
        temp_dir.path(),
        "b.json",
        r#"[{ "lv": 10, "default_exp_rate": 6.0 }]"#,
    );
    // A: (100 / 1.0) * 2.0 = 200, B: (100 / 2.0) * 6.0 = 300
    let config_a = AddonConfig::activated(&rates_a).with_base_rates(1.0, 1.0);
    let config_b = AddonConfig::activated(&rates_b).with_base_rates(2.0, 2.0);

    let addon = Arc::new(DynamicRate::new());
    addon.configure(&config_a);

    let mut registry = HookRegistry::new();
    addon.load(&mut registry);
    let registry = &registry;

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(move || {
                for _ in 0..500 {
                    let seen = award(registry, SubjectView::new(10, false), ExpAward::new(100.0));
                    assert_eq!(seen.len(), 1);
                    assert!(seen[0] == 200.0 || seen[0] == 300.0, "mixed snapshot: {}", seen[0]);
                }
            });
        }

        let addon = Arc::clone(&addon);
        scope.spawn(move || {
            for i in 0..50 {
                let config = if i % 2 == 0 { &config_b } else { &config_a };
                addon.configure(config);
            }
        });
    });

    assert_eq!(addon.snapshot().version, 51);
}

#[test]
fn test_concurrent_configure_keeps_config_in_step() {
    let temp_dir = TempDir::new().unwrap();
    let rates = write_rates(
        temp_dir.path(),
        "dynamic_rate.json",
        r#"[{ "lv": 10, "default_exp_rate": 2.0 }]"#,
    );

    let addon = DynamicRate::new();
    let configs: Vec<AddonConfig> = (20..28)
        .map(|max_lv| AddonConfig::activated(&rates).with_max_level(max_lv))
        .collect();

    thread::scope(|scope| {
        for config in &configs {
            let addon = &addon;
            scope.spawn(move || {
                for _ in 0..25 {
                    addon.configure(config);
                }
            });
        }
    });

    let snapshot = addon.snapshot();
    let config = addon.config().unwrap();
    assert_eq!(snapshot.version, 8 * 25);
    assert_eq!(config.max_lv, Some(snapshot.config.max_level));

    // reconfigure re-reads the configuration that produced the current snapshot
    let rebuilt = addon.reconfigure().unwrap();
    assert_eq!(rebuilt.config.max_level, snapshot.config.max_level);
}
