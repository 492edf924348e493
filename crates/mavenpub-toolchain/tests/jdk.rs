use std::path::{Path, PathBuf};

use mavenpub_core::toolchain::{JavaLanguageVersion, JvmVendor, ToolchainRequirement};
use mavenpub_toolchain::jdk;
use mavenpub_util::errors::PublishError;

fn fake_jdk(root: &Path, dir: &str, version: &str, implementor: &str) -> PathBuf {
    let home = root.join(dir);
    std::fs::create_dir_all(&home).unwrap();
    std::fs::write(
        home.join("release"),
        format!("IMPLEMENTOR=\"{implementor}\"\nJAVA_VERSION=\"{version}\"\n"),
    )
    .unwrap();
    home
}

fn java8_adoptium() -> ToolchainRequirement {
    ToolchainRequirement {
        language_version: JavaLanguageVersion::of(8),
        vendor: Some(JvmVendor::Adoptium),
    }
}

#[test]
fn probe_reads_release_file() {
    let tmp = tempfile::tempdir().unwrap();
    let home = fake_jdk(tmp.path(), "temurin-8", "1.8.0_392", "Eclipse Adoptium");
    let info = jdk::probe_jdk(&home).unwrap();
    assert_eq!(info.version, "1.8.0_392");
    assert_eq!(info.implementor.as_deref(), Some("Eclipse Adoptium"));
    assert_eq!(info.language_version(), Some(JavaLanguageVersion::of(8)));
}

#[test]
fn probe_of_empty_dir_is_none() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(jdk::probe_jdk(tmp.path()).is_none());
}

#[test]
fn find_matching_skips_wrong_version_and_vendor() {
    let tmp = tempfile::tempdir().unwrap();
    let candidates = vec![
        fake_jdk(tmp.path(), "temurin-17", "17.0.2", "Eclipse Adoptium"),
        fake_jdk(tmp.path(), "corretto-8", "1.8.0_402", "Amazon.com Inc."),
        fake_jdk(tmp.path(), "temurin-8", "1.8.0_392", "Eclipse Adoptium"),
    ];
    let info = jdk::find_matching(&java8_adoptium(), &candidates).unwrap();
    assert!(info.home.ends_with("temurin-8"));
}

#[test]
fn any_vendor_accepts_first_matching_version() {
    let tmp = tempfile::tempdir().unwrap();
    let candidates = vec![
        fake_jdk(tmp.path(), "corretto-8", "1.8.0_402", "Amazon.com Inc."),
        fake_jdk(tmp.path(), "temurin-8", "1.8.0_392", "Eclipse Adoptium"),
    ];
    let req = ToolchainRequirement {
        language_version: JavaLanguageVersion::of(8),
        vendor: None,
    };
    let info = jdk::find_matching(&req, &candidates).unwrap();
    assert!(info.home.ends_with("corretto-8"));
}

#[test]
fn mismatch_is_toolchain_error_listing_found_jdks() {
    let tmp = tempfile::tempdir().unwrap();
    let candidates = vec![fake_jdk(tmp.path(), "temurin-21", "21.0.1", "Eclipse Adoptium")];
    let err = jdk::find_matching(&java8_adoptium(), &candidates).unwrap_err();
    let err = err.downcast_ref::<PublishError>().unwrap();
    assert!(matches!(err, PublishError::Toolchain { .. }));
    assert!(err.to_string().contains("21.0.1"));
}

#[test]
fn no_candidates_is_toolchain_error() {
    let err = jdk::find_matching(&java8_adoptium(), &[]).unwrap_err();
    assert!(err.to_string().contains("No JDK found for Java 8 (Eclipse Adoptium)"));
}
