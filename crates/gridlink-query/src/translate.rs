use crate::{
    serializer::{FilterQuery, Serializer},
    Scope,
};

use gridlink_core::{
    schema::{ColumnId, Schema},
    stmt::{self, BinaryOp, Expr},
    Error, Result,
};
use gridlink_wire::attribute_path;

/// The outcome of translating one SELECT into the store's filter-query
/// language.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedQuery {
    /// The filter-query text handed to the store.
    pub text: String,

    /// The projected expressions, key columns first.
    pub projected: Vec<stmt::Expr>,

    /// Document attribute path of each projected column, parallel to
    /// `projected` (aggregates excluded). Used to address values in decoded
    /// documents and to shape flattened result rows.
    pub attribute_paths: Vec<String>,

    /// Row limit, driven through the store cursor rather than the text.
    pub limit: Option<u64>,

    /// Row offset, likewise a cursor-side value.
    pub offset: Option<u64>,

    /// True when the projection was suppressed because a projected column
    /// lives below the document's top level; the store then returns whole
    /// documents for the codec to decode.
    pub whole_document: bool,
}

/// Translates relational statements against a fixed schema.
///
/// Problems found during a pass are collected and reported together in a
/// single translation error, so a statement with several issues does not
/// surface them one at a time.
pub struct Translator<'a> {
    schema: &'a Schema,
}

struct Projection {
    exprs: Vec<Expr>,
    paths: Vec<String>,
    whole_document: bool,
    has_aggregate: bool,
}

impl<'a> Translator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Translate a SELECT.
    ///
    /// With `include_pk` set, the root table's key columns are forced to the
    /// front of the projection even when the statement does not name them;
    /// the mutation layer relies on this to recover document identity.
    pub fn translate_query(
        &self,
        query: &stmt::Query,
        include_pk: bool,
    ) -> Result<TranslatedQuery> {
        let mut problems = vec![];

        let scope = Scope::resolve(self.schema, &query.body.source)?;
        let projection = self.project(&scope, query, include_pk, &mut problems);
        let filter = self.fold_filter(&scope, &query.body, &mut problems);

        let filter_query = FilterQuery {
            projection: if projection.whole_document {
                None
            } else {
                Some(&projection.exprs)
            },
            filter: filter.as_ref(),
            group_by: &query.body.group_by,
            having: query.body.having.as_ref(),
            order_by: query.order_by.as_ref(),
        };

        let text = Serializer::new(&scope).serialize(&filter_query, &mut problems);

        if !problems.is_empty() {
            return Err(Error::translation(problems));
        }

        Ok(TranslatedQuery {
            text,
            projected: projection.exprs,
            attribute_paths: projection.paths,
            limit: query.limit.and_then(|limit| limit.limit),
            offset: query.limit.and_then(|limit| limit.offset),
            whole_document: projection.whole_document,
        })
    }

    fn project(
        &self,
        scope: &Scope<'_>,
        query: &stmt::Query,
        include_pk: bool,
        problems: &mut Vec<String>,
    ) -> Projection {
        let mut projection = Projection {
            exprs: vec![],
            paths: vec![],
            whole_document: false,
            has_aggregate: false,
        };

        if include_pk {
            if let Some(pk) = scope.top.primary_key_column() {
                projection.exprs.push(Expr::Column(pk.id));
                projection.paths.push(attribute_path(self.schema, pk));
            }
        }

        match &query.body.returning {
            stmt::Returning::Star => {
                if !query.body.source.joins.is_empty() {
                    problems.push("SELECT * cannot be combined with a join".to_string());
                }
                for column in &scope.working.columns {
                    if column.selectable && !column.is_pseudo() {
                        self.project_column(scope, column.id, include_pk, &mut projection, problems);
                    }
                }
            }
            stmt::Returning::Expr(exprs) => {
                for expr in exprs {
                    match expr {
                        Expr::Column(id) => {
                            self.project_column(scope, *id, include_pk, &mut projection, problems);
                        }
                        Expr::Func(func) => {
                            self.project_aggregate(scope, func, &mut projection, problems);
                        }
                        other => {
                            problems.push(format!("cannot project expression {other:?}"));
                        }
                    }
                }
            }
        }

        if projection.whole_document && projection.has_aggregate {
            problems
                .push("an aggregate cannot be combined with a nested projection".to_string());
        }

        projection
    }

    fn project_column(
        &self,
        scope: &Scope<'_>,
        id: ColumnId,
        include_pk: bool,
        projection: &mut Projection,
        problems: &mut Vec<String>,
    ) {
        let column = scope.column(id);
        if !column.selectable {
            problems.push(format!("column `{}` is not selectable", column.name));
            return;
        }

        let column = match scope.normalize_pseudo(column) {
            Ok(column) => column,
            Err(err) => {
                problems.push(err.to_string());
                return;
            }
        };

        if scope.is_nested(column) {
            // The store cannot project below the document's top level;
            // fetch the whole document and let the codec pick values out.
            projection.whole_document = true;
        }

        // Forced key columns are already at the front.
        if include_pk && scope.is_top_pk(column) {
            return;
        }

        projection.exprs.push(Expr::Column(column.id));
        projection.paths.push(attribute_path(self.schema, column));
    }

    fn project_aggregate(
        &self,
        scope: &Scope<'_>,
        func: &stmt::ExprFunc,
        projection: &mut Projection,
        problems: &mut Vec<String>,
    ) {
        if scope.is_merged() {
            problems.push(format!(
                "aggregate {} is not supported over the merged table `{}`",
                func.name(),
                scope.working.name
            ));
            return;
        }

        if let Some(arg) = func.arg() {
            match arg.as_column() {
                Some(id) if scope.is_nested(scope.column(id)) => {
                    problems.push(format!(
                        "aggregate {} cannot cross into the nested column `{}`",
                        func.name(),
                        scope.column(id).name
                    ));
                    return;
                }
                Some(_) => {}
                None => {
                    problems.push(format!(
                        "aggregate {} requires a column argument",
                        func.name()
                    ));
                    return;
                }
            }
        }

        projection.has_aggregate = true;
        projection.exprs.push(Expr::Func(func.clone()));
        // Aggregates produce computed tuples; they have no attribute path.
    }

    /// Combine the join conditions and the WHERE clause, dropping every
    /// conjunct made redundant by merging.
    fn fold_filter(
        &self,
        scope: &Scope<'_>,
        body: &stmt::Select,
        problems: &mut Vec<String>,
    ) -> Option<Expr> {
        let mut conjuncts = vec![];

        for join in &body.source.joins {
            let table = self.schema.table(join.table);
            let root = match self.schema.merge_root(table) {
                Ok(root) => root,
                Err(err) => {
                    problems.push(err.to_string());
                    continue;
                }
            };
            if root.id != scope.top.id {
                problems.push(format!(
                    "cannot join `{}` and `{}`: not part of the same document",
                    scope.working.name, table.name
                ));
                continue;
            }
            if let Some(expr) = self.prune(scope, &join.on, problems) {
                conjuncts.push(expr);
            }
        }

        if let Some(filter) = &body.filter {
            if let Some(expr) = self.prune(scope, filter, problems) {
                conjuncts.push(expr);
            }
        }

        let mut conjuncts = conjuncts.into_iter();
        let first = conjuncts.next()?;
        Some(conjuncts.fold(first, Expr::and))
    }

    /// Drop subtrees that are tautologies under merging. An equality between
    /// two columns resolving to the same qualified path holds for every
    /// document, so it is elided; `None` means "always true".
    fn prune(&self, scope: &Scope<'_>, expr: &Expr, problems: &mut Vec<String>) -> Option<Expr> {
        match expr {
            Expr::BinaryOp(binary) if binary.op == BinaryOp::Eq => {
                if let (Some(lhs), Some(rhs)) = (binary.lhs.as_column(), binary.rhs.as_column()) {
                    let lhs = scope.qualified_name(scope.column(lhs));
                    let rhs = scope.qualified_name(scope.column(rhs));
                    if lhs == rhs {
                        return None;
                    }
                }
                Some(expr.clone())
            }
            Expr::And(and) => {
                let operands: Vec<_> = and
                    .operands
                    .iter()
                    .filter_map(|operand| self.prune(scope, operand, problems))
                    .collect();
                match operands.len() {
                    0 => None,
                    1 => operands.into_iter().next(),
                    _ => Some(Expr::And(stmt::ExprAnd { operands })),
                }
            }
            Expr::Or(or) => {
                let mut operands = Vec::with_capacity(or.operands.len());
                for operand in &or.operands {
                    // A tautological disjunct makes the whole OR true.
                    let operand = self.prune(scope, operand, problems)?;
                    operands.push(operand);
                }
                Some(Expr::Or(stmt::ExprOr { operands }))
            }
            Expr::Not(inner) => match self.prune(scope, inner, problems) {
                Some(inner) => Some(Expr::Not(Box::new(inner))),
                None => {
                    problems.push(
                        "cannot negate a join condition made redundant by merging".to_string(),
                    );
                    None
                }
            },
            _ => Some(expr.clone()),
        }
    }
}
