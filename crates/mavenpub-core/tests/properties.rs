use mavenpub_core::properties::{interpolate, load_env_file};
use std::collections::BTreeMap;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn load_env_file_with_comments_exports_and_quotes() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        "# repository credentials\n\
         DasBabyPixelUsername=deploy\n\
         \n\
         export DasBabyPixelPassword=\"p@ss word\"\n\
         KEY3  =  'value3'\n"
    )
    .unwrap();
    tmp.flush().unwrap();

    let env = load_env_file(tmp.path()).unwrap();
    assert_eq!(env.get("DasBabyPixelUsername"), Some(&"deploy".to_string()));
    assert_eq!(env.get("DasBabyPixelPassword"), Some(&"p@ss word".to_string()));
    assert_eq!(env.get("KEY3"), Some(&"value3".to_string()));
    assert_eq!(env.len(), 3);
}

#[test]
fn load_env_file_nonexistent_path_returns_empty_map() {
    let path = std::path::Path::new("/nonexistent/path/to/.mavenpub.env");
    let env = load_env_file(path).unwrap();
    assert!(env.is_empty());
}

#[test]
fn interpolate_replaces_env_refs() {
    let mut env = BTreeMap::new();
    env.insert("REPO_HOST".to_string(), "nexus.example.com".to_string());
    let result = interpolate("url = \"https://${env:REPO_HOST}/maven\"", &env);
    assert_eq!(result, "url = \"https://nexus.example.com/maven\"");
}

#[test]
fn interpolate_missing_key_without_fallback_is_empty() {
    let result = interpolate("x=${env:NONEXISTENT_VAR_99999}", &BTreeMap::new());
    assert_eq!(result, "x=");
}

#[test]
fn interpolate_uses_fallback() {
    let result = interpolate("v=${env:NONEXISTENT_VAR_99999:-1.0}", &BTreeMap::new());
    assert_eq!(result, "v=1.0");
}

#[test]
fn interpolate_unterminated_reference_left_alone() {
    let input = "a ${env:OPEN";
    assert_eq!(interpolate(input, &BTreeMap::new()), input);
}
