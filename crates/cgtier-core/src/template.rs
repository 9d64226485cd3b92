//! Userscript template rendering.
//!
//! Templates use `<%= it.<key> %>` tags; values are inserted verbatim, with
//! no escaping and no whitespace trimming around tags.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::tierlist::TierListData;

const TAG_OPEN: &str = "<%=";
const TAG_CLOSE: &str = "%>";

pub fn render(template: &str, values: &HashMap<&str, String>) -> Result<String> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    let mut consumed = 0;

    while let Some(start) = rest.find(TAG_OPEN) {
        output.push_str(&rest[..start]);
        let body_start = start + TAG_OPEN.len();
        let end = rest[body_start..]
            .find(TAG_CLOSE)
            .ok_or(Error::UnterminatedTemplateTag(consumed + start))?;

        let expr = rest[body_start..body_start + end].trim();
        let key = expr.strip_prefix("it.").unwrap_or(expr);
        let value = values
            .get(key)
            .ok_or_else(|| Error::UnknownTemplateKey(expr.to_string()))?;
        output.push_str(value);

        let next = body_start + end + TAG_CLOSE.len();
        consumed += next;
        rest = &rest[next..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Render the distributable userscript with the dataset embedded
pub fn build_userscript(template: &str, version: &str, data: &TierListData) -> Result<String> {
    let mut values = HashMap::new();
    values.insert("version", version.to_string());
    values.insert("tierlistObject", data.to_minified_json()?);
    render(template, &values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_tags() {
        let mut values = HashMap::new();
        values.insert("version", "1.2.0".to_string());
        let rendered = render("// @version     <%= it.version %>\n", &values).unwrap();
        assert_eq!(rendered, "// @version     1.2.0\n");
    }

    #[test]
    fn test_render_keeps_surrounding_whitespace() {
        let mut values = HashMap::new();
        values.insert("a", "x".to_string());
        assert_eq!(render("  <%=it.a%>  \n<%= it.a %>", &values).unwrap(), "  x  \nx");
    }

    #[test]
    fn test_render_unknown_key() {
        let values = HashMap::new();
        assert!(matches!(
            render("<%= it.missing %>", &values),
            Err(Error::UnknownTemplateKey(key)) if key == "it.missing"
        ));
    }

    #[test]
    fn test_render_unterminated_tag() {
        let mut values = HashMap::new();
        values.insert("a", "x".to_string());
        assert!(matches!(
            render("<%= it.a %> then <%= it.a", &values),
            Err(Error::UnterminatedTemplateTag(17))
        ));
    }

    #[test]
    fn test_build_userscript_embeds_minified_json() {
        let template = "// @version <%= it.version %>\nconst TIERLISTS = <%= it.tierlistObject %>;\n";
        let rendered = build_userscript(template, "0.3.1", &TierListData::default()).unwrap();
        assert_eq!(
            rendered,
            "// @version 0.3.1\nconst TIERLISTS = {\"dp\":[],\"sp\":[]};\n"
        );
    }
}
