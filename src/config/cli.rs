use std::ffi::OsString;

/// Flags that consume the following token as their value when written without `=`.
const VALUE_FLAGS: &[&str] = &["path", "package-name", "variable", "log-format", "go-file"];

/// Rewrites Go-style long flags (`-path`, `-private=true`) to `--path`, `--private=true`.
///
/// The program name, single-letter short flags, values and everything after a
/// bare `--` pass through unchanged. A token following a value flag is a value
/// even when it starts with `-`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;
    let mut expects_value = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || passthrough || expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        match arg.to_str() {
            Some("--") => {
                passthrough = true;
                normalized.push(arg);
            }
            Some(flag) => {
                expects_value = takes_separate_value(flag);
                if is_go_long_flag(flag) {
                    normalized.push(format!("-{}", flag).into());
                } else {
                    normalized.push(arg);
                }
            }
            None => normalized.push(arg),
        }
    }

    normalized
}

fn is_go_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let name = rest.split('=').next().unwrap_or(rest);
    !rest.starts_with('-') && name.len() > 1 && name.starts_with(|c: char| c.is_ascii_alphabetic())
}

fn takes_separate_value(arg: &str) -> bool {
    let name = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'));
    matches!(name, Some(name) if VALUE_FLAGS.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().copied())
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_normalize_go_style_flags() {
        assert_eq!(
            normalize(&["bin", "-path", "./dist", "-private=true", "--variable", "x", "-h"]),
            vec!["bin", "--path", "./dist", "--private=true", "--variable", "x", "-h"]
        );
    }

    #[test]
    fn test_normalize_keeps_dash_prefixed_values() {
        assert_eq!(
            normalize(&["bin", "-path", "-site", "--variable", "-x", "-private"]),
            vec!["bin", "--path", "-site", "--variable", "-x", "--private"]
        );
        assert_eq!(
            normalize(&["bin", "-path=dist", "-variable", "v"]),
            vec!["bin", "--path=dist", "--variable", "v"]
        );
    }

    #[test]
    fn test_normalize_leaves_values_and_passthrough_alone() {
        assert_eq!(
            normalize(&["-path", "-1", "--", "-private"]),
            vec!["-path", "-1", "--", "-private"]
        );
    }
}
