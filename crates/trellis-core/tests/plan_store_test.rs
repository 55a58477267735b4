//! End-to-end plan creation and listing on a real filesystem.

use tempfile::TempDir;

use trellis_core::PlanStore;
use trellis_core::frontmatter;
use trellis_test_utils::write_file;

#[test]
fn created_plan_is_listed_as_draft() {
    let dir = TempDir::new().unwrap();
    let store = PlanStore::new(dir.path().join("plans"));

    let path = store.create("Add login", "app").expect("create failed");
    let plans = store.list(Some("app"));

    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].status, "draft");
    assert_eq!(plans[0].repo, "app");
    assert_eq!(plans[0].file, path);
    assert!(plans[0].id.starts_with("ap"));
    assert_eq!(plans[0].id.len(), 7);
}

#[test]
fn plan_path_follows_layout() {
    let dir = TempDir::new().unwrap();
    let store = PlanStore::new(dir.path().join("plans"));

    let path = store.create("Refactor   Parser", "api").expect("create failed");
    let plans = store.list(None);
    let id = &plans[0].id;

    assert_eq!(
        path,
        dir.path()
            .join("plans")
            .join("api")
            .join(format!("{id}-refactor-parser.md"))
    );
}

#[test]
fn hand_edited_status_is_picked_up() {
    let dir = TempDir::new().unwrap();
    let store = PlanStore::new(dir.path().join("plans"));

    let path = store.create("Ship it", "app").expect("create failed");
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, content.replace("status: draft", "status: active")).unwrap();

    let plans = store.list(None);
    assert_eq!(plans[0].status, "active");

    // The body survives the edit untouched.
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(frontmatter::body(&content), "\n# Ship it\n\n## Goal\n\n## Tasks\n- [ ]\n");
}

#[test]
fn listing_mixes_created_and_foreign_documents() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("plans");
    let store = PlanStore::new(&root);

    store.create("Add login", "app").expect("create failed");
    write_file(&root.join("app").join("legacy.md"), "---\nid: xy123\n---\n\nold notes\n");
    write_file(&root.join("app").join("scratch.md"), "just some notes\n");
    write_file(&root.join("docs").join("a.md"), "---\nid: do00001\nstatus: done\nrepo: docs-site\n---\n");

    let plans = store.list(None);
    let summary: Vec<(&str, &str)> = plans
        .iter()
        .map(|p| (p.status.as_str(), p.repo.as_str()))
        .collect();
    assert_eq!(
        summary,
        [("done", "docs-site"), ("draft", "app"), ("unknown", "app")]
    );
}
