//! End-to-end: list panes from canned tmux output, then drive operations on
//! the listed panes and check the argv each one produces.

use std::collections::HashMap;
use std::sync::Mutex;

use panectl_tmux::{
    CommandOutput, LIST_PANES_FORMAT, ListScope, Pane, ParsePolicy, TmuxCommandRunner, TmuxError,
    find_pane, list_panes,
};

/// Answers by command verb and records every argv it sees.
struct FakeTmux {
    by_verb: HashMap<&'static str, Result<&'static str, &'static str>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeTmux {
    fn new(by_verb: &[(&'static str, Result<&'static str, &'static str>)]) -> Self {
        Self {
            by_verb: by_verb.iter().cloned().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls_for(&self, verb: &str) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .expect("lock")
            .iter()
            .filter(|argv| argv[0] == verb)
            .cloned()
            .collect()
    }
}

impl TmuxCommandRunner for FakeTmux {
    fn run(&self, args: &[&str]) -> Result<CommandOutput, TmuxError> {
        self.calls
            .lock()
            .expect("lock")
            .push(args.iter().map(|s| s.to_string()).collect());
        match self.by_verb.get(args[0]) {
            Some(Ok(stdout)) => Ok(CommandOutput::from_stdout(*stdout)),
            Some(Err(stderr)) => Err(TmuxError::CommandFailed {
                status: "exit code 1".to_string(),
                stderr: stderr.to_string(),
            }),
            None => Ok(CommandOutput::default()),
        }
    }
}

const LISTING: &str = "$1:main:@1:shell:0:%0:1\n$1:main:@1:shell:0:%1:0\n";

#[test]
fn listing_yields_documented_panes() {
    let tmux = FakeTmux::new(&[("list-panes", Ok(LISTING))]);
    let panes = list_panes(&tmux, &[], ParsePolicy::Lenient).expect("should list");

    let first = Pane {
        id: 0,
        session_id: 1,
        session_name: "main".to_string(),
        window_id: 1,
        window_name: "shell".to_string(),
        window_index: 0,
        active: true,
    };
    let second = Pane {
        id: 1,
        active: false,
        ..first.clone()
    };
    assert_eq!(panes, vec![first, second]);
}

#[test]
fn noise_is_ignored_and_order_kept() {
    let output = "\
$1:main:@1:shell:0:%3:0
tmux: some warning
$1:main:@1:shell:0:%1:1

$2:work:@4:build:0:%2:1
";
    let tmux = FakeTmux::new(&[("list-panes", Ok(output))]);
    let panes = list_panes(&tmux, &ListScope::All.to_args(), ParsePolicy::Lenient)
        .expect("should list");
    let ids: Vec<u32> = panes.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    let strict = list_panes(&tmux, &ListScope::All.to_args(), ParsePolicy::Strict);
    assert!(matches!(strict, Err(TmuxError::UnmatchedLine { line_num: 2, .. })));
}

#[test]
fn non_numeric_id_fails_whole_listing() {
    let tmux = FakeTmux::new(&[(
        "list-panes",
        Ok("$1:main:@1:shell:0:%0:1\n$x:main:@1:shell:0:%1:0\n"),
    )]);
    let result = list_panes(&tmux, &[], ParsePolicy::Lenient);
    assert!(matches!(result, Err(TmuxError::ParseError { .. })));
}

#[test]
fn listing_runner_failure_returns_no_panes() {
    let tmux = FakeTmux::new(&[("list-panes", Err("no server running"))]);
    let err = list_panes(&tmux, &["-a"], ParsePolicy::Lenient).expect_err("no server");
    assert_eq!(err.stderr(), Some("no server running"));
}

#[test]
fn find_then_operate() {
    let tmux = FakeTmux::new(&[
        ("list-panes", Ok(LISTING)),
        ("display-message", Ok("132x40\n")),
        ("capture-pane", Ok("hello\n")),
    ]);

    let pane = find_pane(&tmux, "main:1.1", ParsePolicy::Lenient)
        .expect("should list")
        .expect("pane exists");
    assert!(!pane.active);
    assert_eq!(tmux.calls_for("list-panes")[0], vec!["list-panes", "-F", LIST_PANES_FORMAT, "-a"]);

    assert_eq!(pane.current_size(&tmux).expect("size"), (132, 40));
    assert_eq!(pane.capture(&tmux).expect("capture"), "hello\n");
    pane.set_focus(&tmux).expect("focus");
    pane.run_command(&tmux, "echo hi").expect("send");

    assert_eq!(tmux.calls_for("select-pane")[0], vec!["select-pane", "-t", "main:1.1"]);
    assert_eq!(
        tmux.calls_for("send-keys")[0],
        vec!["send-keys", "-t", "main:1.1", "echo hi", "C-m"]
    );
}

#[test]
fn move_between_listed_panes() {
    let listing = "$1:main:@1:shell:0:%0:1\n$1:main:@6:logs:2:%4:1\n";
    let tmux = FakeTmux::new(&[("list-panes", Ok(listing))]);
    let panes = list_panes(&tmux, &["-s", "-t", "main"], ParsePolicy::Lenient).expect("list");
    let (mut source, dest) = (panes[0].clone(), panes[1].clone());

    source.move_pane(&tmux, &dest, false).expect("move");
    assert_eq!(
        tmux.calls_for("join-pane")[0],
        vec!["join-pane", "-s", "main:1.0", "-t", "main:6", "-d"]
    );
    assert_eq!(source.window_id, 6);
    assert_eq!(source.window_name, "logs");
    // Stale until re-listed.
    assert_eq!(source.id, 0);
}

#[test]
fn failed_move_keeps_snapshot() {
    let listing = "$1:main:@1:shell:0:%0:1\n$1:main:@6:logs:2:%4:1\n";
    let tmux = FakeTmux::new(&[
        ("list-panes", Ok(listing)),
        ("join-pane", Err("can't join a pane to its own window")),
    ]);
    let panes = list_panes(&tmux, &[], ParsePolicy::Lenient).expect("list");
    let mut source = panes[0].clone();

    let err = source.move_pane(&tmux, &panes[1], true).expect_err("join-pane fails");
    assert_eq!(err.stderr(), Some("can't join a pane to its own window"));
    assert_eq!(source, panes[0]);
}
