//! Structural counters over a function body
//!
//! A single `syn::visit` pass tallies decision points, operations and
//! assignments. Each construct counts once where it occurs, independent
//! of nesting depth or how many arms it has.

use syn::punctuated::Punctuated;
use syn::visit::Visit;
use syn::{BinOp, Block, Expr, Token};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralMetrics {
    /// `if`, `match`, `while`, `loop` and `for` occurrences
    pub branching_factor: u32,
    /// Binary operations, calls and assignments
    pub operational_complexity: u32,
    /// Assignments, a subset of `operational_complexity`
    pub local_assignment_count: u32,
}

impl StructuralMetrics {
    pub fn from_block(block: &Block) -> Self {
        let mut visitor = StructuralVisitor::default();
        visitor.visit_block(block);
        visitor.metrics
    }

    fn record_branch(&mut self) {
        self.branching_factor += 1;
    }

    fn record_operation(&mut self) {
        self.operational_complexity += 1;
    }

    fn record_assignment(&mut self) {
        self.operational_complexity += 1;
        self.local_assignment_count += 1;
    }
}

#[derive(Default)]
struct StructuralVisitor {
    metrics: StructuralMetrics,
}

fn is_compound_assignment(op: &BinOp) -> bool {
    matches!(
        op,
        BinOp::AddAssign(_)
            | BinOp::SubAssign(_)
            | BinOp::MulAssign(_)
            | BinOp::DivAssign(_)
            | BinOp::RemAssign(_)
            | BinOp::BitXorAssign(_)
            | BinOp::BitAndAssign(_)
            | BinOp::BitOrAssign(_)
            | BinOp::ShlAssign(_)
            | BinOp::ShrAssign(_)
    )
}

impl<'ast> Visit<'ast> for StructuralVisitor {
    fn visit_expr_if(&mut self, node: &'ast syn::ExprIf) {
        self.metrics.record_branch();
        syn::visit::visit_expr_if(self, node);
    }

    fn visit_expr_match(&mut self, node: &'ast syn::ExprMatch) {
        self.metrics.record_branch();
        syn::visit::visit_expr_match(self, node);
    }

    fn visit_expr_while(&mut self, node: &'ast syn::ExprWhile) {
        self.metrics.record_branch();
        syn::visit::visit_expr_while(self, node);
    }

    fn visit_expr_loop(&mut self, node: &'ast syn::ExprLoop) {
        self.metrics.record_branch();
        syn::visit::visit_expr_loop(self, node);
    }

    fn visit_expr_for_loop(&mut self, node: &'ast syn::ExprForLoop) {
        self.metrics.record_branch();
        syn::visit::visit_expr_for_loop(self, node);
    }

    fn visit_expr_binary(&mut self, node: &'ast syn::ExprBinary) {
        if is_compound_assignment(&node.op) {
            self.metrics.record_assignment();
        } else {
            self.metrics.record_operation();
        }
        syn::visit::visit_expr_binary(self, node);
    }

    fn visit_expr_assign(&mut self, node: &'ast syn::ExprAssign) {
        self.metrics.record_assignment();
        syn::visit::visit_expr_assign(self, node);
    }

    fn visit_local(&mut self, node: &'ast syn::Local) {
        if node.init.is_some() {
            self.metrics.record_assignment();
        }
        syn::visit::visit_local(self, node);
    }

    fn visit_expr_call(&mut self, node: &'ast syn::ExprCall) {
        self.metrics.record_operation();
        syn::visit::visit_expr_call(self, node);
    }

    fn visit_expr_method_call(&mut self, node: &'ast syn::ExprMethodCall) {
        self.metrics.record_operation();
        syn::visit::visit_expr_method_call(self, node);
    }

    fn visit_macro(&mut self, node: &'ast syn::Macro) {
        self.metrics.record_operation();

        // Format-style macros carry ordinary expressions; anything else
        // is opaque and only the invocation itself counts.
        if let Ok(args) = node.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
            for arg in &args {
                self.visit_expr(arg);
            }
        }
    }

    // Nested items are separate declarations, not part of this body.
    fn visit_item(&mut self, _node: &'ast syn::Item) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_empty_block() {
        let block: Block = parse_quote! {{}};
        assert_eq!(StructuralMetrics::from_block(&block), StructuralMetrics::default());
    }

    #[test]
    fn test_if_else_chain_counts_each_if() {
        let block: Block = parse_quote! {{
            if a { x } else if b { y } else { z }
        }};
        assert_eq!(StructuralMetrics::from_block(&block).branching_factor, 2);
    }

    #[test]
    fn test_match_counts_once() {
        let block: Block = parse_quote! {{
            match value {
                0 => zero(),
                1 => one(),
                _ => other(),
            }
        }};
        let metrics = StructuralMetrics::from_block(&block);
        assert_eq!(metrics.branching_factor, 1);
        assert_eq!(metrics.operational_complexity, 3);
    }

    #[test]
    fn test_compound_assignment_is_an_assignment() {
        let block: Block = parse_quote! {{
            total += step * 2;
        }};
        let metrics = StructuralMetrics::from_block(&block);
        assert_eq!(metrics.operational_complexity, 2);
        assert_eq!(metrics.local_assignment_count, 1);
    }

    #[test]
    fn test_let_without_initializer_is_not_an_assignment() {
        let block: Block = parse_quote! {{
            let pending;
            let ready = true;
        }};
        let metrics = StructuralMetrics::from_block(&block);
        assert_eq!(metrics.local_assignment_count, 1);
        assert_eq!(metrics.operational_complexity, 1);
    }

    #[test]
    fn test_macro_arguments_are_walked() {
        let block: Block = parse_quote! {{
            println!("{}", a + b);
            let v = vec![0; n];
        }};
        let metrics = StructuralMetrics::from_block(&block);
        // println!, a + b, vec!, let v
        assert_eq!(metrics.operational_complexity, 4);
        assert_eq!(metrics.local_assignment_count, 1);
    }

    #[test]
    fn test_nested_items_are_skipped_but_closures_are_not() {
        let block: Block = parse_quote! {{
            fn helper() { if x { y = 1; } }
            let f = |n| if n > 0 { n } else { 0 };
        }};
        let metrics = StructuralMetrics::from_block(&block);
        assert_eq!(metrics.branching_factor, 1);
        assert_eq!(metrics.operational_complexity, 2);
        assert_eq!(metrics.local_assignment_count, 1);
    }
}
