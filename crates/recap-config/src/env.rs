use std::sync::LazyLock;

use regex::Regex;

/// `{{ env.VAR }}` with an optional `| default("value")` suffix
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
});

/// Substitute environment placeholders in raw configuration text
///
/// Runs before TOML parsing so config structs hold plain values. Comment
/// lines are copied through untouched, which lets a commented-out secret
/// reference an unset variable.
pub(crate) fn expand_env(input: &str) -> anyhow::Result<String> {
    let mut output = String::with_capacity(input.len());

    for line in input.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            output.push_str(&expand_line(line)?);
        }
    }

    Ok(output)
}

fn expand_line(line: &str) -> anyhow::Result<String> {
    let mut expanded = String::with_capacity(line.len());
    let mut cursor = 0;

    for captures in PLACEHOLDER.captures_iter(line) {
        let (Some(whole), Some(key)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        expanded.push_str(&line[cursor..whole.start()]);
        expanded.push_str(&resolve(key.as_str(), captures.get(2).map(|m| m.as_str()))?);
        cursor = whole.end();
    }

    expanded.push_str(&line[cursor..]);
    Ok(expanded)
}

fn resolve(key: &str, default: Option<&str>) -> anyhow::Result<String> {
    let Some(var) = key.strip_prefix("env.").filter(|var| !var.contains('.')) else {
        anyhow::bail!("unsupported placeholder `{key}`, only `env.NAME` is available");
    };

    match (std::env::var(var), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(fallback)) => Ok(fallback.to_owned()),
        (Err(_), None) => Err(anyhow::anyhow!("environment variable `{var}` is not set")),
    }
}
