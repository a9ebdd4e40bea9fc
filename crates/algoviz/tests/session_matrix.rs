use algoviz::cli::{execute, parse_bst_command, render_tree, BstCommand};
use algoviz::{BstConfig, BstSession, Error, NodeHighlight, TreeStats};

fn sample() -> BstSession {
    BstSession::with_sample(&BstConfig::default())
}

#[test]
fn sample_session_matrix() {
    let mut s = sample();
    assert_eq!(
        s.stats(),
        TreeStats {
            count: 7,
            height: 2,
            min: Some(20),
            max: Some(80)
        }
    );
    let res = s.search(40).unwrap();
    assert!(res.found);
    assert_eq!(res.path, vec![50, 30, 40]);
    assert_eq!(s.highlight(40), NodeHighlight::Found);
    assert_eq!(s.highlight(30), NodeHighlight::Path);
    assert_eq!(s.highlight(70), NodeHighlight::Normal);

    s.delete(30).unwrap();
    assert_eq!(s.traversals().inorder, vec![20, 40, 50, 60, 70, 80]);
    assert_eq!(s.highlight(40), NodeHighlight::Normal);
}

#[test]
fn rejected_operations_do_not_mutate() {
    let mut s = sample();
    let before = s.traversals();
    assert!(matches!(s.insert(40), Err(Error::DuplicateValue(40))));
    assert!(matches!(s.delete(45), Err(Error::NotFound(45))));
    assert!(matches!(s.insert(100_000), Err(Error::InvalidInput(_))));
    assert_eq!(s.traversals(), before);
}

#[test]
fn search_miss_is_not_an_error() {
    let mut s = sample();
    let res = s.search(65).unwrap();
    assert!(!res.found);
    assert_eq!(res.path, vec![50, 70, 60]);
    assert_eq!(s.highlight(50), NodeHighlight::Normal);
}

#[test]
fn empty_tree_search_is_rejected() {
    let mut s = BstSession::new(&BstConfig::default());
    assert!(matches!(s.search(1), Err(Error::EmptyStructure("tree"))));
    assert_eq!(s.stats().height, -1);
    assert_eq!(s.stats().min, None);
}

#[test]
fn parse_value_matrix() {
    let s = sample();
    assert_eq!(s.parse_value(" 42 ").unwrap(), 42);
    assert_eq!(s.parse_value("-7").unwrap(), -7);
    for bad in ["", "  ", "4.5", "abc", "1e3", "10000"] {
        assert!(matches!(s.parse_value(bad), Err(Error::InvalidInput(_))), "{bad:?}");
    }
}

#[test]
fn configured_range_is_enforced() {
    let config = BstConfig {
        min_value: 0,
        max_value: 10,
        sample: false,
    };
    let mut s = BstSession::with_sample(&config);
    assert!(s.tree().is_empty());
    s.insert(10).unwrap();
    assert!(matches!(s.insert(11), Err(Error::InvalidInput(_))));
    assert!(matches!(s.insert(-1), Err(Error::InvalidInput(_))));
}

#[test]
fn sample_respects_configured_range() {
    let narrow = BstConfig {
        min_value: 0,
        max_value: 10,
        sample: true,
    };
    let s = BstSession::with_sample(&narrow);
    assert!(s.tree().is_empty());

    let partial = BstConfig {
        min_value: 25,
        max_value: 75,
        sample: true,
    };
    let mut s = BstSession::with_sample(&partial);
    let present = s.traversals().inorder;
    assert_eq!(present, vec![30, 40, 50, 60, 70]);
    for v in present {
        assert!(s.search(v).unwrap().found, "{v}");
        s.delete(v).unwrap();
    }
    assert!(s.tree().is_empty());
}

#[test]
fn shell_commands_matrix() {
    let mut s = sample();
    let run = |s: &mut BstSession, line: &str| {
        let cmd = parse_bst_command(line).unwrap().unwrap();
        execute(s, cmd)
    };
    assert_eq!(run(&mut s, "insert 45").unwrap(), "inserted 45");
    assert_eq!(
        run(&mut s, "search 45").unwrap(),
        "45 found | path: 50 → 30 → 40 → 45"
    );
    assert!(render_tree(&s).ends_with("highlight: [30] [40] {45} [50]"));
    assert!(matches!(run(&mut s, "insert 45"), Err(Error::DuplicateValue(45))));
    assert!(matches!(run(&mut s, "delete x"), Err(Error::InvalidInput(_))));
    assert_eq!(run(&mut s, "delete 45").unwrap(), "deleted 45");
    assert_eq!(
        run(&mut s, "stats").unwrap(),
        "count 7  height 2  min 20  max 80"
    );
    assert_eq!(run(&mut s, "clear").unwrap(), "tree cleared");
    assert_eq!(
        run(&mut s, "traversals").unwrap(),
        "in-order:   —\npre-order:  —\npost-order: —"
    );
    assert_eq!(run(&mut s, "stats").unwrap(), "count 0  height 0  min —  max —");
    assert!(matches!(run(&mut s, "search 1"), Err(Error::EmptyStructure(_))));
    assert_eq!(render_tree(&s), "Bst ∅");
}

#[test]
fn parse_command_matrix() {
    assert_eq!(parse_bst_command("   ").unwrap(), None);
    assert_eq!(parse_bst_command("QUIT").unwrap(), Some(BstCommand::Quit));
    assert_eq!(
        parse_bst_command("i 5").unwrap(),
        Some(BstCommand::Insert("5".to_string()))
    );
    assert!(matches!(parse_bst_command("insert"), Err(Error::InvalidInput(_))));
    assert!(matches!(parse_bst_command("rotate 5"), Err(Error::InvalidInput(_))));
}
