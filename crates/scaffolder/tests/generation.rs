use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use scaffolder::{
    FsStore, GenerationAction, GenerationOptions, Generator, ScaffoldError, TemplateKind,
    list_templates,
};
use tempfile::{TempDir, tempdir};

fn templates_fixture() -> (TempDir, PathBuf, PathBuf) {
    let temp = tempdir().unwrap();
    let templates = temp.path().join("templates");
    let output = temp.path().join("src").join("components");

    let component = templates.join("component");
    fs::create_dir_all(component.join("__tests__")).unwrap();
    fs::write(
        component.join("__templateNameToPascalCase__.tsx"),
        "export const __templateNameToPascalCase__ = () => <div className=\"__templateNameToKebabCase__\" />;\n",
    )
    .unwrap();
    fs::write(
        component.join("__tests__").join("__templateNameToPascalCase__.test.tsx"),
        "describe('__templateNameToTitleCase__', () => {});\n",
    )
    .unwrap();
    fs::write(
        component.join("index.ts"),
        "export * from './__templateNameToPascalCase__';\n",
    )
    .unwrap();

    fs::write(
        templates.join("use__templateNameToPascalCase__.ts"),
        "export function use__templateNameToPascalCase__() {}\n",
    )
    .unwrap();

    (temp, templates, output)
}

fn relative_paths(root: &Path, paths: impl IntoIterator<Item = PathBuf>) -> BTreeSet<String> {
    paths
        .into_iter()
        .map(|path| {
            path.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn lists_templates_from_disk() {
    let (_temp, templates, _output) = templates_fixture();
    let listed = list_templates(&FsStore::new(), &templates);
    let summary: Vec<_> = listed
        .iter()
        .map(|template| (template.name.as_str(), template.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("component", TemplateKind::Directory),
            ("use__templateNameToPascalCase__.ts", TemplateKind::File),
        ]
    );
}

#[test]
fn listing_a_missing_root_is_empty() {
    let temp = tempdir().unwrap();
    assert!(list_templates(&FsStore::new(), &temp.path().join("absent")).is_empty());
}

#[test]
fn directory_template_generates_container_and_contents() {
    let (_temp, templates, output) = templates_fixture();
    let mut generator = Generator::new(FsStore::new(), &templates);

    let results = generator
        .generate(
            "component",
            "test button",
            &output,
            GenerationOptions::default(),
        )
        .unwrap();

    let container = output.join("TestButton");
    assert!(container.is_dir());
    assert_eq!(
        relative_paths(&output, results.iter().map(|r| r.path.clone())),
        BTreeSet::from([
            "TestButton/TestButton.tsx".to_string(),
            "TestButton/__tests__/TestButton.test.tsx".to_string(),
            "TestButton/index.ts".to_string(),
        ])
    );
    assert!(
        results
            .iter()
            .all(|result| result.action == GenerationAction::Create)
    );
    assert_eq!(
        fs::read_to_string(container.join("TestButton.tsx")).unwrap(),
        "export const TestButton = () => <div className=\"test-button\" />;\n"
    );
    assert_eq!(
        fs::read_to_string(container.join("__tests__/TestButton.test.tsx")).unwrap(),
        "describe('Test Button', () => {});\n"
    );
}

#[test]
fn single_file_template_is_idempotent_across_runs() {
    let temp = tempdir().unwrap();
    let templates = temp.path().join("templates");
    let output = temp.path().join("out");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("widget.txt"), "__templateNameToPascalCase__").unwrap();

    let mut generator = Generator::new(FsStore::new(), &templates);
    let first = generator
        .generate("widget.txt", "My Widget", &output, GenerationOptions::default())
        .unwrap();
    let second = generator
        .generate("widget.txt", "My Widget", &output, GenerationOptions::default())
        .unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].action, GenerationAction::Create);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].action, GenerationAction::Overwrite);
    assert_eq!(first[0].path, second[0].path);
    assert_eq!(
        fs::read_to_string(output.join("widget.txt")).unwrap(),
        "MyWidget"
    );
}

#[test]
fn dry_run_reports_without_touching_disk() {
    let (_temp, templates, output) = templates_fixture();
    let mut generator = Generator::new(FsStore::new(), &templates);

    let results = generator
        .generate(
            "use__templateNameToPascalCase__.ts",
            "auth session",
            &output,
            GenerationOptions {
                dry_run: true,
                ..GenerationOptions::default()
            },
        )
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, output.join("useAuthSession.ts"));
    assert_eq!(results[0].action, GenerationAction::Create);
    assert!(!output.exists());
    assert_eq!(generator.generated_files(), results.as_slice());
}

#[test]
fn traversal_and_missing_templates_are_distinct_errors() {
    let (_temp, templates, output) = templates_fixture();
    let mut generator = Generator::new(FsStore::new(), &templates);

    let err = generator
        .generate("../escape", "thing", &output, GenerationOptions::default())
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::InvalidInput(_)), "{err}");

    let err = generator
        .generate("nope", "thing", &output, GenerationOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("nope"), "{err}");
    assert!(err.is_not_found());
    assert!(!output.exists());
}
