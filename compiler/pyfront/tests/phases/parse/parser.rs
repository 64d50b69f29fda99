//! Whole-module parses through the public driver API.

use pretty_assertions::assert_eq;
use pyfront::ParseErrorKind;
use pyfront_ir::{NodeId, StmtKind};

use crate::common::{format, parse_err, parse_ok};

const PY2_MODULE: &str = "\
#!/usr/bin/env python
import os, sys
from . import util as u

class Config(object):
    # defaults
    def __init__(self, path=None, **kw):
        self.path = path or os.getcwd()
        self.extra = {k: v for k, v in kw.items() if v is not None}

    @property
    def name(self):
        return self.path.split(\"/\")[-1]

def main(argv):
    try:
        cfg = Config(*argv[1:])
    except IOError, e:
        print >>sys.stderr, \"error:\", e
        return 1
    else:
        print cfg.name
    finally:
        sys.stdout.flush()
    return 0
";

const PY2_FORMATTED: &str = "\
#!/usr/bin/env python
import os, sys
from . import util as u
class Config(object):
    # defaults
    def __init__(self, path=None, **kw):
        self.path = (path or os.getcwd())
        self.extra = {k: v for k, v in kw.items() if (v is not None)}
    @property
    def name(self):
        return self.path.split(\"/\")[-1]
def main(argv):
    try:
        cfg = Config(*argv[1:])
    except IOError as e:
        print >>sys.stderr, \"error:\", e
        return 1
    else:
        print cfg.name
    finally:
        sys.stdout.flush()
    return 0
";

#[test]
fn python2_module() {
    let (ast, stmts) = parse_ok(PY2_MODULE);
    let kinds: Vec<&str> = stmts
        .iter()
        .map(|&id| match ast.stmt(id).kind {
            StmtKind::Comment(_) => "comment",
            StmtKind::Import(_) => "import",
            StmtKind::From { .. } => "from",
            StmtKind::ClassDef { .. } => "class",
            StmtKind::FunctionDef { .. } => "def",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, ["comment", "import", "from", "class", "def"]);
    assert_eq!(format(PY2_MODULE), PY2_FORMATTED);
}

#[test]
fn formatting_is_stable() {
    assert_eq!(format(PY2_FORMATTED), PY2_FORMATTED);
}

#[test]
fn python3_module() {
    let source = "\
async def fetch(session, *urls, timeout: float = 1.0) -> list:
    async with session.get(urls[0]) as resp:
        data = await resp.json()
    results = [await f(u) async for u in urls]
    if (n := len(results)) > 10:
        raise ValueError(n) from None
    nonlocal_count: int = 0
    return {**data, \"n\": n}
";
    let expected = "\
async def fetch(session, *urls, timeout: float = 1.0) -> list:
    async with session.get(urls[0]) as resp:
        data = await resp.json()
    results = [await f(u) async for u in urls]
    if ((n := len(results)) > 10):
        raise ValueError(n) from None
    nonlocal_count: int = 0
    return {**data, \"n\": n}
";
    assert_eq!(format(source), expected);
}

#[test]
fn parents_point_at_enclosing_block() {
    let (ast, stmts) = parse_ok("if a:\n    b = 1\n");
    let StmtKind::If { body, .. } = ast.stmt(stmts[0]).kind else {
        panic!("not an if");
    };
    let StmtKind::Suite(ref inner) = ast.stmt(body).kind else {
        panic!("body is not a suite");
    };
    assert_eq!(ast.parent(inner[0]), Some(NodeId::Stmt(body)));
    assert_eq!(ast.parent(body), Some(NodeId::Stmt(stmts[0])));
    assert_eq!(ast.parent(stmts[0]), None);
}

#[test]
fn syntax_errors_name_the_line() {
    let err = parse_err("def f():\n    pass\nclass C\n    pass\n");
    assert_eq!(err.line, 3);
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "':'".into(),
            found: "NEWLINE".into(),
        }
    );

    let err = parse_err("try:\n    pass\nx = 1\n");
    assert_eq!(err.kind, ParseErrorKind::MissingExceptOrFinally);
}
