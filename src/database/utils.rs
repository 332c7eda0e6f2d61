use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?").expect("placeholder pattern is valid"));

/// Collapse whitespace and rewrite `?` placeholders to PostgreSQL's `$n` form.
pub fn sql(query: &str) -> String {
    let cleaned = query.split_whitespace().collect::<Vec<&str>>().join(" ");
    let mut param_index = 1;
    let mut result = cleaned;
    while let Some(mat) = PLACEHOLDER.find(&result) {
        let replacement = format!("${}", param_index);
        result.replace_range(mat.range(), &replacement);
        param_index += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::sql;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_placeholders_in_order() {
        let query = sql(r#"
            UPDATE
                salary_structures
            SET
                name = ?,
                country = ?
            WHERE
                id = ?
        "#);

        assert_eq!(
            query,
            "UPDATE salary_structures SET name = $1, country = $2 WHERE id = $3"
        );
    }

    #[test]
    fn leaves_queries_without_placeholders_alone() {
        assert_eq!(
            sql("SELECT id FROM salary_structures ORDER BY id"),
            "SELECT id FROM salary_structures ORDER BY id"
        );
    }
}
