//! Tests for reading and writing versions in JSON and YAML documents.

use serde::{Deserialize, Serialize};
use vergo::{Bump, Version};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Release {
    name: String,
    version: Version,
    bump: Bump,
}

#[test]
fn version_serializes_as_canonical_string() {
    let v = Version::new(1, 22, 6, "eks-7d68063").with_prefix(true);
    let json = serde_json::to_string(&v).expect("serialize");
    assert_eq!(json, "\"v1.22.6-eks-7d68063\"");
}

#[test]
fn json_document_round_trip() {
    let release = Release {
        name: "api".to_string(),
        version: Version::new(2, 0, 1, "rc3").with_prefix(true),
        bump: Bump::ReleaseCandidate,
    };
    let json = serde_json::to_string(&release).expect("serialize");
    assert!(json.contains("\"version\":\"v2.0.1-rc3\""), "got {json}");
    assert!(json.contains("\"bump\":\"rc\""), "got {json}");

    let back: Release = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, release);
    assert!(back.version.has_prefix());
}

#[test]
fn yaml_document_round_trip() {
    let yaml = "name: worker\nversion: v1.2.3-rc1\nbump: minor\n";
    let release: Release = serde_yaml::from_str(yaml).expect("deserialize");
    assert_eq!(release.version, Version::new(1, 2, 3, "rc1"));
    assert!(release.version.has_prefix());
    assert_eq!(release.bump, Bump::Minor);

    let out = serde_yaml::to_string(&release).expect("serialize");
    assert_eq!(out, yaml);
}

#[test]
fn yaml_bumped_version_written_back() {
    let mut release: Release =
        serde_yaml::from_str("name: cli\nversion: 0.4.2\nbump: patch\n").expect("deserialize");
    release.version.bump(release.bump).expect("patch bump");
    let out = serde_yaml::to_string(&release).expect("serialize");
    assert!(out.contains("version: 0.4.3\n"), "got {out}");
}

#[test]
fn malformed_version_reports_parse_error() {
    let err = serde_json::from_str::<Version>("\"v1.123a.0\"").unwrap_err();
    assert!(
        err.to_string().contains("malformed semver: minor"),
        "got {err}"
    );

    let err = serde_yaml::from_str::<Version>("v1").unwrap_err();
    assert!(err.to_string().contains("malformed semver"), "got {err}");
}

#[test]
fn non_string_version_rejected() {
    let err = serde_json::from_str::<Version>("123").unwrap_err();
    assert!(err.to_string().contains("a version string"), "got {err}");
}

#[test]
fn unknown_bump_name_rejected() {
    let err = serde_json::from_str::<Bump>("\"huge\"").unwrap_err();
    assert!(err.to_string().contains("huge"), "got {err}");
}
