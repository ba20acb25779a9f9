mod common;
use common::cli::{TkWorkspace, run_tk};

#[test]
fn test_dep_add_is_idempotent() {
    let workspace = TkWorkspace::new();
    workspace.seed_ticket("td-ab12", "open", 2, &[], "Parent");
    workspace.seed_ticket("td-cd34", "open", 2, &[], "Child");

    let first = run_tk(&workspace, ["dep", "td-ab12", "td-cd34"], "dep add");
    assert!(first.status.success(), "stderr: {}", first.stderr);
    assert_eq!(first.line(), "Added dependency: td-ab12 -> td-cd34");

    let again = run_tk(&workspace, ["dep", "td-ab12", "td-cd34"], "dep add again");
    assert!(again.status.success());
    assert_eq!(again.line(), "Dependency already exists");

    let contents = workspace.read_ticket("td-ab12");
    assert!(contents.contains("deps: [td-cd34]\n"));
}

#[test]
fn test_undep_removes_and_reports_missing() {
    let workspace = TkWorkspace::new();
    workspace.seed_ticket("td-ab12", "open", 2, &["td-cd34"], "Parent");
    workspace.seed_ticket("td-cd34", "open", 2, &[], "Child");

    let undep = run_tk(&workspace, ["undep", "td-ab12", "td-cd34"], "undep");
    assert!(undep.status.success(), "stderr: {}", undep.stderr);
    assert_eq!(undep.line(), "Removed dependency: td-ab12 -/-> td-cd34");
    assert!(workspace.read_ticket("td-ab12").contains("deps: []\n"));

    let again = run_tk(&workspace, ["undep", "td-ab12", "td-cd34"], "undep again");
    assert!(!again.status.success());
    assert!(again.stderr.contains("dependency not found"));
}

#[test]
fn test_tree_orders_deeper_subtree_first() {
    let workspace = TkWorkspace::new();
    // y's subtree is deeper than z's, so y renders first even though
    // z comes first in the stored order.
    workspace.seed_ticket("td-x", "open", 2, &["td-z", "td-y"], "Root");
    workspace.seed_ticket("td-y", "open", 2, &["td-w"], "Deep");
    workspace.seed_ticket("td-z", "open", 2, &[], "Shallow");
    workspace.seed_ticket("td-w", "open", 2, &[], "Leaf");

    let tree = run_tk(&workspace, ["dep", "tree", "td-x"], "dep tree");
    assert!(tree.status.success(), "stderr: {}", tree.stderr);

    let lines: Vec<&str> = tree.stdout.lines().collect();
    assert_eq!(lines[0], "td-x [open] Root");
    assert_eq!(lines[1], "├── td-y [open] Deep");
    assert_eq!(lines[2], "│   └── td-w [open] Leaf");
    assert_eq!(lines[3], "└── td-z [open] Shallow");
}

#[test]
fn test_tree_compact_collapses_unresolvable_tail() {
    let workspace = TkWorkspace::new();
    workspace.seed_ticket("td-x", "open", 2, &["td-ghost", "td-y"], "Root");
    workspace.seed_ticket("td-y", "open", 2, &[], "Only child");

    let compact = run_tk(&workspace, ["dep", "tree", "td-x"], "compact tree");
    assert!(compact.stdout.contains("└── td-y [open] Only child"));

    let full = run_tk(&workspace, ["dep", "tree", "--full", "td-x"], "full tree");
    assert!(full.stdout.contains("├── td-y [open] Only child"));
}

#[test]
fn test_tree_terminates_on_cycle() {
    let workspace = TkWorkspace::new();
    workspace.seed_ticket("td-a", "open", 2, &["td-b"], "A");
    workspace.seed_ticket("td-b", "open", 2, &["td-a"], "B");

    let tree = run_tk(&workspace, ["dep", "tree", "td-a"], "cyclic tree");
    assert!(tree.status.success(), "stderr: {}", tree.stderr);
    assert_eq!(tree.stdout.lines().count(), 2);
    assert!(tree.stdout.starts_with("td-a [open] A"));
}
