use std::fs;

use scaffolder::{FsStore, Placeholder, TemplateValidator};
use tempfile::tempdir;

#[test]
fn validate_all_reports_each_template() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("templates");
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::create_dir_all(root.join("hook")).unwrap();
    fs::write(
        root.join("hook").join("use__templateNameToPascalCase__.ts"),
        format!("export const x = '{}';\n", Placeholder::CamelCase),
    )
    .unwrap();
    fs::write(root.join("broken.ts"), "const y = __templateNameWrong__;\n").unwrap();
    fs::write(root.join("crlf.txt"), "a\r\nb\nc\n").unwrap();

    let results = TemplateValidator::new(FsStore::new()).validate_all(&root);

    assert_eq!(results.len(), 4);
    assert!(results["hook"].valid);
    assert!(results["hook"].warnings.is_empty());

    let empty = &results["empty"];
    assert!(empty.valid);
    assert_eq!(empty.warnings.len(), 1);
    assert!(empty.warnings[0].contains("Empty directory"));

    let broken = &results["broken.ts"];
    assert!(!broken.valid);
    assert_eq!(broken.errors.len(), 1);
    assert!(broken.errors[0].contains("Invalid placeholder"));
    assert!(broken.errors[0].contains("__templateNameWrong__"));

    let crlf = &results["crlf.txt"];
    assert!(crlf.valid);
    assert!(crlf.warnings[0].contains("Mixed line endings"));
}

#[test]
fn validate_all_on_missing_root_yields_synthetic_entry() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("absent");

    let results = TemplateValidator::new(FsStore::new()).validate_all(&root);
    assert_eq!(results.len(), 1);
    let result = &results[&root.display().to_string()];
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn incomplete_placeholder_in_content() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("note.md");
    fs::write(&file, "# __templateName\n").unwrap();

    let result = TemplateValidator::new(FsStore::new()).validate(&file);
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Incomplete placeholder"));
}
