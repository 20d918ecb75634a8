use std::fs;

use bren::core::{
  conflicts::SiblingIndex,
  listing::{
    read_dir_sorted,
    sibling_names,
  },
};

#[test]
fn listing_sorts_dirs_first_then_names()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let root = tmp.path();
  fs::create_dir(root.join("zdir")).unwrap();
  fs::write(root.join("Alpha.txt"), b"a").unwrap();
  fs::write(root.join("beta.txt"), b"b").unwrap();
  fs::write(root.join(".hidden"), b"h").unwrap();

  let entries = read_dir_sorted(root, false, 100).expect("read");
  let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
  assert_eq!(names, vec!["zdir", "Alpha.txt", "beta.txt"]);
  assert!(entries[0].is_dir);

  let entries = read_dir_sorted(root, true, 100).expect("read");
  let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
  assert_eq!(names, vec!["zdir", ".hidden", "Alpha.txt", "beta.txt"]);
}

#[test]
fn listing_caps_item_count()
{
  let tmp = tempfile::tempdir().expect("tmp");
  for i in 0..10
  {
    fs::write(tmp.path().join(format!("f{}.txt", i)), b"x").unwrap();
  }
  let entries = read_dir_sorted(tmp.path(), false, 4).expect("read");
  assert_eq!(entries.len(), 4);
}

#[test]
fn sibling_snapshot_sees_hidden_entries()
{
  // The conflict check must see everything the filesystem does, dotfiles
  // included, even when the listing hides them.
  let tmp = tempfile::tempdir().expect("tmp");
  fs::write(tmp.path().join("shown.txt"), b"s").unwrap();
  fs::write(tmp.path().join(".secret"), b"s").unwrap();

  let set = sibling_names(tmp.path()).expect("siblings");
  assert_eq!(set.len(), 2);
  assert!(set.contains_name("shown.txt"));
  assert!(set.contains_name(".secret"));
  assert!(!set.contains_name("missing"));
}
