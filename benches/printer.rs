#[macro_use]
extern crate bencher;

use bencher::Bencher;

fn graphql_ast_print_query(bench: &mut Bencher) {
    use graphql_ast_printer::ast::*;
    use graphql_ast_printer::json::*;
    let ctx = ASTContext::new();
    let json: serde_json::Value = serde_json::from_str(QUERY).unwrap();
    let ast = Document::from_json(&ctx, &json).unwrap();
    bench.iter(|| ast.print());
}

fn graphql_ast_print_schema(bench: &mut Bencher) {
    use graphql_ast_printer::ast::*;
    use graphql_ast_printer::json::*;
    let ctx = ASTContext::new();
    let json: serde_json::Value = serde_json::from_str(SCHEMA).unwrap();
    let ast = Document::from_json(&ctx, &json).unwrap();
    bench.iter(|| ast.print());
}

fn graphql_ast_print_json(bench: &mut Bencher) {
    use graphql_ast_printer::json::print_json;
    let json: serde_json::Value = serde_json::from_str(QUERY).unwrap();
    bench.iter(|| print_json(&json).unwrap());
}

fn graphql_ast_read_json(bench: &mut Bencher) {
    use graphql_ast_printer::ast::*;
    use graphql_ast_printer::json::*;
    let json: serde_json::Value = serde_json::from_str(SCHEMA).unwrap();
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::from_json(&ctx, &json).ok();
    });
}

benchmark_group!(
    print,
    graphql_ast_print_query,
    graphql_ast_print_schema,
    graphql_ast_print_json,
    graphql_ast_read_json
);

benchmark_main!(print);

static QUERY: &str = include_str!("../fixture/kitchen_sink.json");
static SCHEMA: &str = include_str!("../fixture/schema_kitchen_sink.json");
