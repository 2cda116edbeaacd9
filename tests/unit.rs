//! Unit tests for display formatting and error text.
mod common;
use common::*;
use sabun::prelude::*;

#[test]
fn test_stat_value_display() {
    assert_eq!(format!("{}", StatValue(42.0)), "42");
    assert_eq!(format!("{}", StatValue(10.5)), "10.5");
    assert_eq!(format!("{}", StatValue(0.0)), "0");
    // Integral values beyond i64 range must not saturate to i64::MAX.
    assert_eq!(format!("{}", StatValue(1e300)), "1e300");
    assert_eq!(format!("{}", StatValue(-1e300)), "-1e300");
}

#[test]
fn test_version_display_and_equality() {
    let v: Version = "2024-w31".into();
    assert_eq!(format!("{}", v), "2024-w31");
    assert_eq!(v, Version::from("2024-w31".to_string()));
    assert_ne!(v, Version::from("2024-w32"));
}

#[test]
fn test_delta_tags() {
    let added = Delta::Added {
        key: "nails".to_string(),
        new: 1u32,
    };
    let removed = Delta::Removed {
        key: "wood".to_string(),
        old: 2u32,
    };
    let modified = Delta::Modified {
        key: "wood".to_string(),
        old: 2u32,
        new: 3,
    };
    assert_eq!(added.tag(), "added");
    assert_eq!(removed.tag(), "removed");
    assert_eq!(modified.tag(), "modified");
    assert_eq!(added.key(), "nails");
}

#[test]
fn test_report_formatting_groups_by_facet() {
    let old = iron_sword_v1();
    let mut new = old.clone();
    new.version = "2".into();
    new.materials.insert("Iron Ingot".to_string(), 4);
    new.materials.insert("Coal".to_string(), 2);
    new.output_stats.insert("damage".to_string(), StatValue(12.5));
    new.profession_requirements.remove("blacksmith");

    let report = diff_recipes(&old, &new).unwrap();
    let text = ReportFormatter::format_report(&report);

    let expected = "\
Recipe 'Iron Sword' updated (1 -> 2)
Material changes:
- Coal: added (2)
- Iron Ingot: modified (3 -> 4)
Stat changes:
- damage: modified (10 -> 12.5)
Requirement changes:
- blacksmith: removed (was 5)";
    assert_eq!(text, expected);
}

#[test]
fn test_report_formatting_omits_unchanged_facets() {
    let old = iron_sword_v1();
    let mut new = old.clone();
    new.version = "2".into();
    new.materials.insert("Coal".to_string(), 2);

    let report = diff_recipes(&old, &new).unwrap();
    let text = ReportFormatter::format_report(&report);

    assert!(text.contains("Material changes:"));
    assert!(!text.contains("Stat changes:"));
    assert!(!text.contains("Requirement changes:"));
}

#[test]
fn test_console_notifier_writes_alert() {
    let old = iron_sword_v1();
    let mut new = old.clone();
    new.version = "2".into();
    new.materials.insert("Coal".to_string(), 2);
    let report = diff_recipes(&old, &new).unwrap();

    let mut notifier = ConsoleNotifier::new(Vec::new());
    notifier.show_update_alert(&report).unwrap();

    let written = String::from_utf8(notifier.into_inner()).unwrap();
    assert!(written.starts_with("Recipe 'Iron Sword' updated"));
    assert!(written.contains("- Coal: added (2)"));
}

#[test]
fn test_error_display() {
    let err = DiffError::IdentityMismatch {
        left: "Iron Sword".to_string(),
        right: "Iron Axe".to_string(),
    };
    assert!(err.to_string().contains("Iron Sword"));
    assert!(err.to_string().contains("Iron Axe"));

    let not_found = SourceError::NotFound("Oak Plank".to_string());
    assert!(not_found.to_string().contains("Oak Plank"));

    let display = NotifyError::DisplayUnavailable("broken pipe".to_string());
    assert!(display.to_string().contains("broken pipe"));

    let dup = LoadError::DuplicateKey {
        recipe: "Iron Sword".to_string(),
        facet: "material",
        key: "Iron Ingot".to_string(),
    };
    assert!(dup.to_string().contains("material"));
    assert!(dup.to_string().contains("Iron Ingot"));
}

#[test]
fn test_report_serializes_with_action_tags() {
    let old = iron_sword_v1();
    let mut new = old.clone();
    new.version = "2".into();
    new.materials.insert("Coal".to_string(), 2);

    let report = diff_recipes(&old, &new).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"action\":\"added\""));
    assert!(json.contains("\"Coal\""));
}
