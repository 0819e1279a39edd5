//! Minimal `{token}` templates.
//!
//! `{name}` is replaced by the value of the token `name`; `{{` and `}}` are
//! literal braces. Anything else (an unknown token, an empty `{}`, an unclosed
//! or stray brace) is a [`LoggerError::Configuration`].

use crate::error::LoggerError;

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Brace(char),
    Token(&'a str),
}

fn malformed(template: &str, reason: impl Into<String>) -> LoggerError {
    LoggerError::Configuration {
        template: template.to_string(),
        reason: reason.into(),
    }
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>, LoggerError> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        if pos > 0 {
            segments.push(Segment::Text(&rest[..pos]));
        }
        let brace = rest.as_bytes()[pos] as char;
        let after = &rest[pos + 1..];

        if after.starts_with(brace) {
            segments.push(Segment::Brace(brace));
            rest = &after[1..];
            continue;
        }
        if brace == '}' {
            return Err(malformed(template, "single '}' encountered"));
        }

        let end = after
            .find('}')
            .ok_or_else(|| malformed(template, "expected '}' before end of string"))?;
        let name = &after[..end];
        if name.is_empty() {
            return Err(malformed(template, "empty token '{}'"));
        }
        if name.contains('{') {
            return Err(malformed(template, "unexpected '{' in token"));
        }
        segments.push(Segment::Token(name));
        rest = &after[end + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    Ok(segments)
}

/// Substitutes `tokens` into `template`.
pub fn render(template: &str, tokens: &[(&str, &str)]) -> Result<String, LoggerError> {
    let mut out = String::with_capacity(template.len());
    for segment in parse(template)? {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Brace(brace) => out.push(brace),
            Segment::Token(name) => {
                let (_, value) = tokens
                    .iter()
                    .find(|(token, _)| *token == name)
                    .ok_or_else(|| malformed(template, format!("unknown token '{}'", name)))?;
                out.push_str(value);
            }
        }
    }
    Ok(out)
}

/// Checks that `template` parses and only references `allowed` tokens.
pub fn validate(template: &str, allowed: &[&str]) -> Result<(), LoggerError> {
    for segment in parse(template)? {
        if let Segment::Token(name) = segment {
            if !allowed.contains(&name) {
                return Err(malformed(template, format!("unknown token '{}'", name)));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_tokens() {
        let out = render(
            "Calling {callable}({args})",
            &[("callable", "tests.f"), ("args", "a = 1")],
        )
        .unwrap();
        assert_eq!(out, "Calling tests.f(a = 1)");
    }

    #[test]
    fn test_render_repeated_and_unused_tokens() {
        let out = render("{x}-{x}", &[("x", "1"), ("y", "2")]).unwrap();
        assert_eq!(out, "1-1");
        assert_eq!(render("plain", &[]).unwrap(), "plain");
    }

    #[test]
    fn test_escaped_braces() {
        let out = render("{{literal}} {name}", &[("name", "v")]).unwrap();
        assert_eq!(out, "{literal} v");
    }

    #[test]
    fn test_malformed_templates() {
        for template in ["{unknown}", "{", "oops}", "{}", "{a{b}"] {
            let err = render(template, &[("a", "1")]).unwrap_err();
            assert!(
                matches!(err, LoggerError::Configuration { .. }),
                "{template:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate("{name} = {value}", &["name", "value"]).is_ok());
        assert!(validate("{callable}", &["name", "value"]).is_err());
    }
}
