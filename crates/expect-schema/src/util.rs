/// Strip any namespace prefix from an identifier, keeping the last segment.
///
/// Callers may pass the path of the Rust type backing a GraphQL type instead
/// of its schema name: `crate::model::Foo` → `Foo`, `App\Models\Foo` → `Foo`.
pub fn unqualified_name(name: &str) -> &str {
    let after_path = name.rsplit("::").next().unwrap_or(name);
    after_path.rsplit('\\').next().unwrap_or(after_path)
}
