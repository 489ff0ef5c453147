mod assignments;
pub use assignments::{Assignment, Assignments};

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_between;
pub use expr_between::ExprBetween;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_field;
pub use expr_field::ExprField;

mod expr_in_list;
pub use expr_in_list::{ExprInList, InItem};

mod expr_in_subquery;
pub use expr_in_subquery::ExprInSubquery;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_stmt;
pub use expr_stmt::ExprStmt;

mod insert;
pub use insert::Insert;

mod limit;
pub use limit::Limit;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::{OrderBy, OrderByExpr};

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod ty;
pub use ty::Type;

mod update;
pub use update::Update;

mod value;
pub use value::Value;
