//! 标识符转义：把 `schema.table.column` 这类路径逐段加双引号。

/// 逐段加 `"`，段内的 `"` 写成 `""`，NUL 字符直接丢弃，段之间用 `.` 连接。
///
/// ```
/// use halo_pgsql::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier(["public", "users"]), r#""public"."users""#);
/// ```
pub fn sanitize_identifier(parts: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push('"');
        for ch in part.as_ref().chars() {
            match ch {
                '"' => out.push_str("\"\""),
                '\0' => {}
                c => out.push(c),
            }
        }
        out.push('"');
    }
    out
}
