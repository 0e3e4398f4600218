//! Typed GraphQL selection sets.
//!
//! A small builder for the query fragments the mirror sends upstream. The
//! builder is total: any tree it can represent renders to a syntactically
//! valid fragment. It does no schema-aware validation; the mirror only ever
//! feeds it fields that came from a validated schema.

/// An argument value: a literal scalar, an explicit null, or a `$variable`
/// reference bound by the surrounding operation.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    String(String),
    Int(i64),
    Bool(bool),
    Null,
    Variable(String),
}

impl QueryValue {
    /// Reference a query variable by name (without the `$`).
    pub fn variable(name: &str) -> Self {
        QueryValue::Variable(name.to_string())
    }

    fn render(&self) -> String {
        match self {
            // JSON string escaping is a superset of what GraphQL needs.
            QueryValue::String(s) => serde_json::to_string(s).unwrap_or_default(),
            QueryValue::Int(n) => n.to_string(),
            QueryValue::Bool(b) => b.to_string(),
            QueryValue::Null => "null".to_string(),
            QueryValue::Variable(name) => format!("${}", name),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::String(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::String(s)
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Int(i64::from(n))
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

/// A named argument on a field.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: QueryValue,
}

/// One field selection, possibly with arguments and child selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: String,
    pub args: Vec<Argument>,
    pub children: Vec<Selection>,
}

impl Selection {
    /// Start a selection of the named field.
    pub fn field(name: &str) -> Self {
        Self {
            name: name.to_string(),
            args: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an argument.
    pub fn arg(mut self, name: &str, value: impl Into<QueryValue>) -> Self {
        self.args.push(Argument {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Add child selections.
    pub fn children(mut self, children: impl IntoIterator<Item = Selection>) -> Self {
        self.children.extend(children);
        self
    }

    /// Render this selection at the given indentation depth.
    pub fn render(&self, depth: usize) -> String {
        let pad = "  ".repeat(depth);
        let mut out = format!("{}{}", pad, self.name);

        if !self.args.is_empty() {
            let rendered: Vec<String> = self
                .args
                .iter()
                .map(|a| format!("{}: {}", a.name, a.value.render()))
                .collect();
            out.push_str(&format!("({})", rendered.join(", ")));
        }

        if !self.children.is_empty() {
            out.push_str(" {\n");
            out.push_str(&render_selections(&self.children, depth + 1));
            out.push_str(&format!("\n{}}}", pad));
        }

        out
    }
}

/// Render a selection set, one selection per line.
pub fn render_selections(selections: &[Selection], depth: usize) -> String {
    selections
        .iter()
        .map(|s| s.render(depth))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field() {
        assert_eq!(Selection::field("id").render(0), "id");
        assert_eq!(Selection::field("id").render(2), "    id");
    }

    #[test]
    fn test_field_with_args_and_children() {
        let sel = Selection::field("issues")
            .arg("first", 50_u32)
            .arg("after", "cursor-1")
            .children([
                Selection::field("totalCount"),
                Selection::field("pageInfo").children([
                    Selection::field("endCursor"),
                    Selection::field("hasNextPage"),
                ]),
            ]);

        let expected = "\
issues(first: 50, after: \"cursor-1\") {
  totalCount
  pageInfo {
    endCursor
    hasNextPage
  }
}";
        assert_eq!(sel.render(0), expected);
    }

    #[test]
    fn test_string_escaping() {
        let sel = Selection::field("f").arg("q", "say \"hi\"\\now");
        assert_eq!(sel.render(0), "f(q: \"say \\\"hi\\\"\\\\now\")");
    }

    #[test]
    fn test_null_and_variable_arguments() {
        let sel = Selection::field("f")
            .arg("after", QueryValue::Null)
            .arg("first", QueryValue::variable("pageSize"));
        assert_eq!(sel.render(0), "f(after: null, first: $pageSize)");
    }
}
