use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scaffolder"))
}

#[test]
fn list_without_templates_is_not_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut cmd = cli();
    cmd.current_dir(temp.path()).arg("list");
    cmd.assert()
        .success()
        .stdout(contains("No templates found in"));
    Ok(())
}

#[test]
fn list_uses_templates_dir_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let templates = temp.path().join(".scaffold");
    fs::create_dir_all(templates.join("hook"))?;
    fs::write(templates.join("hook").join("use.ts"), "x")?;
    fs::write(templates.join("readme.md"), "y")?;
    fs::write(
        temp.path().join("scaffolder.yaml"),
        "templates_dir: .scaffold\n",
    )?;

    let mut cmd = cli();
    cmd.current_dir(temp.path()).arg("list");
    cmd.assert()
        .success()
        .stdout(contains("Templates in .scaffold (2):"))
        .stdout(contains("- hook (directory)"))
        .stdout(contains("- readme.md (file)"));
    Ok(())
}

#[test]
fn malformed_config_exits_with_config_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("scaffolder.yaml"), "unknown_key: true\n")?;

    let mut cmd = cli();
    cmd.current_dir(temp.path()).arg("list");
    cmd.assert()
        .failure()
        .code(78)
        .stderr(contains("invalid config"));
    Ok(())
}

#[test]
fn variables_prints_every_token() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut cmd = cli();
    cmd.current_dir(temp.path()).args(["variables", "user profile"]);
    cmd.assert()
        .success()
        .stdout(contains("__templateNameToPascalCase__ = UserProfile"))
        .stdout(contains("__templateNameToCamelCase__ = userProfile"))
        .stdout(contains("__templateNameToKebabCase__ = user-profile"))
        .stdout(contains("__templateNameToSnakeCase__ = user_profile"))
        .stdout(contains("__templateNameToConstantCase__ = USER_PROFILE"))
        .stdout(contains("__templateNameToTitleCase__ = User Profile"))
        .stdout(contains("__templateNameToLowerCase__ = userprofile"))
        .stdout(contains("__templateNameToLowerCaseWithSpaces__ = user profile"));
    Ok(())
}
