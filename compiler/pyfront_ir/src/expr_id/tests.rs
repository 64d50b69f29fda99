use super::*;

#[test]
fn test_ids_round_trip_index() {
    let id = ExprId::new(42);
    assert_eq!(id.index(), 42);
    assert_eq!(id.raw(), 42);
    assert_eq!(StmtId::new(7).index(), 7);
}

#[test]
fn test_debug_format() {
    assert_eq!(format!("{:?}", ExprId::new(3)), "ExprId(3)");
    assert_eq!(format!("{:?}", StmtId::new(9)), "StmtId(9)");
}

#[test]
fn test_node_id_from() {
    assert_eq!(NodeId::from(ExprId::new(1)), NodeId::Expr(ExprId::new(1)));
    assert_eq!(NodeId::from(StmtId::new(1)), NodeId::Stmt(StmtId::new(1)));
    assert_ne!(NodeId::from(ExprId::new(1)), NodeId::from(StmtId::new(1)));
}
