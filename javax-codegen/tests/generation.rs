//! End-to-end generation tests: source text and selection in, snippet out.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use javax_codegen::{
    GenerateOptions, GenerationRequest, Pipeline, extract_fields, format, join_selections, locate,
    render_builder, render_constructor,
};
use javax_core::{ClassInfo, DeclarationKind};

const ONE_LINE_FOO: &str = "public class Foo { private String name; private int age; }";

fn generate(kind: DeclarationKind, source: &str, selection: &str, indent: usize) -> String {
    Pipeline::default()
        .run(GenerationRequest::new(kind, source, selection).indent_size(indent))
        .expect("generation should succeed")
        .code
}

fn at_level_zero() -> Pipeline {
    Pipeline::new(GenerateOptions {
        initial_indent: 0,
        ..GenerateOptions::default()
    })
}

#[test]
fn test_constructor_for_foo() {
    let fields = extract_fields("private String name;\nprivate int age;");
    let class = locate(ONE_LINE_FOO).unwrap();
    let code = format(2, 1, &render_constructor(&class, &fields)).unwrap();

    assert_eq!(
        code,
        "  private Foo(String name, int age) {\n    this.name = name;\n    this.age = age;\n  }\n"
    );
}

#[test]
fn test_builder_for_foo() {
    let selection = join_selections(&["private String name;", "private int age;"]);
    let code = generate(DeclarationKind::Builder, ONE_LINE_FOO, &selection, 2);

    let expected = "
  private Foo(String name, int age) {
    this.name = name;
    this.age = age;
  }

  public class Builder {
    private String name;
    private int age;

    public Builder setName(String name) {
      this.name = name;
      return this;
    }

    public Builder setAge(int age) {
      this.age = age;
      return this;
    }

    public Foo build() {
      return new Foo(name, age);
    }
  }
";
    assert_eq!(code, &expected[1..]);
}

#[test]
fn test_package_private_class_builder() {
    let source = "class Point {\n    final int x;\n    final int y;\n}\n";
    let code = generate(DeclarationKind::Builder, source, source, 4);

    assert!(code.contains("\n    class Builder {\n"));
    assert!(code.contains("\n        Builder setX(int x) {\n"));
    assert!(code.contains("\n        Point build() {\n            return new Point(x, y);\n"));
}

#[test]
fn test_selection_with_noise() {
    let selection = "\
    // coordinates
    private double lat;

    @Deprecated
    private transient double lon = 0.0;
    public void reset() {
        return;
    }
";
    let code = generate(DeclarationKind::Getters, "", selection, 2);
    assert_eq!(
        code,
        "  public double getLat() {\n    return lat;\n  }\n\n  public double getLon() {\n    return lon;\n  }\n"
    );
}

#[test]
fn test_discontiguous_selections() {
    let source = "public class Pair {\n  int left;\n  // gap\n  int right;\n}\n";
    let selection = join_selections(&["  int left;", "  int right;"]);
    let code = generate(DeclarationKind::Constructor, source, &selection, 2);
    assert!(code.starts_with("  private Pair(int left, int right) {\n"));
}

#[test]
fn test_build_argument_order_matches_fields() {
    let class = ClassInfo::new("public", "Foo");
    let fields = extract_fields("int c;\nint a;\nint b;");
    assert!(render_builder(&class, &fields).contains("return new Foo(c, a, b);"));
}

#[test]
fn test_builder_snapshot() {
    let source = "\
public class Account {
    private final String owner;
    private long balance = 0L;
    private List<String> tags;
}
";
    let generated = at_level_zero()
        .run(GenerationRequest::new(DeclarationKind::Builder, source, source))
        .unwrap();
    assert_eq!(generated.indent_size, 4);
    insta::assert_snapshot!("account_builder", generated.code);
}

#[test]
fn test_getters_snapshot() {
    let selection = "Map<String, List<Integer>> counts;\nfinal String name;";
    let generated = at_level_zero()
        .run(GenerationRequest::new(DeclarationKind::Getters, "", selection).indent_size(4))
        .unwrap();
    insta::assert_snapshot!("nested_generic_getters", generated.code);
}
