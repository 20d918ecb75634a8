use std::fs;

use bren::core::{
  fs_ops::commit_plan,
  transform::{
    RenameRule,
    plan_batch,
  },
};

fn names(list: &[&str]) -> Vec<String>
{
  list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn commit_renames_files_on_disk()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let root = tmp.path();
  fs::write(root.join("report.doc"), b"R").unwrap();
  fs::write(root.join("summary.doc"), b"S").unwrap();

  let rule = RenameRule::Append { text: "2024_".to_string() };
  let plan = plan_batch(&rule, &names(&["report.doc", "summary.doc"]));
  let outcome = commit_plan(root, &plan);

  assert_eq!(outcome.renamed, 2);
  assert_eq!(outcome.skipped, 0);
  assert_eq!(outcome.failed, 0);
  assert!(root.join("2024_report.doc").exists());
  assert!(root.join("2024_summary.doc").exists());
  assert!(!root.join("report.doc").exists());
  assert_eq!(fs::read(root.join("2024_report.doc")).unwrap(), b"R");
}

#[test]
fn unchanged_items_are_skipped()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let root = tmp.path();
  fs::write(root.join("a.txt"), b"a").unwrap();
  fs::write(root.join("b.log"), b"b").unwrap();

  // Only the .log name changes; the .txt entry stays as-is
  let rule = RenameRule::Replace {
    search:      ".log".to_string(),
    replacement: ".txt.bak".to_string(),
  };
  let plan = plan_batch(&rule, &names(&["a.txt", "b.log"]));
  let outcome = commit_plan(root, &plan);

  assert_eq!(outcome.renamed, 1);
  assert_eq!(outcome.skipped, 1);
  assert!(root.join("a.txt").exists());
  assert!(root.join("b.txt.bak").exists());
}

#[test]
fn existing_target_fails_that_item_and_continues()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let root = tmp.path();
  fs::write(root.join("one.txt"), b"1").unwrap();
  fs::write(root.join("two.txt"), b"2").unwrap();
  // Target that appeared after the preview
  fs::write(root.join("x_one.txt"), b"OLD").unwrap();

  let rule = RenameRule::Append { text: "x_".to_string() };
  let plan = plan_batch(&rule, &names(&["one.txt", "two.txt"]));
  let outcome = commit_plan(root, &plan);

  assert_eq!(outcome.renamed, 1);
  assert_eq!(outcome.failed, 1);
  assert_eq!(outcome.messages.len(), 1);
  // The pre-existing file was not clobbered and the rest of the batch ran
  assert_eq!(fs::read(root.join("x_one.txt")).unwrap(), b"OLD");
  assert!(root.join("one.txt").exists());
  assert!(root.join("x_two.txt").exists());
  assert!(outcome.summary().contains("failed 1"));
}
