//! Positional argument handling.
//!
//! `ortho_config` owns the flags, so positionals are pulled out of the raw
//! argument list before it sees them.

use std::ffi::OsString;

use persent::PersentError;

/// Long flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &["--token", "--api-base", "--cache-dir", "--config-path"];

/// Short flags that consume the following argument as their value.
const VALUE_SHORT_FLAGS: &[&str] = &["-t", "-c"];

/// Splits raw arguments into positionals and the arguments left for
/// `ortho_config`.
///
/// The program name stays at the front of the filtered list. `--name=value`
/// forms never consume the next argument, and everything after `--` is
/// positional.
pub fn extract_positional_arguments(args: Vec<OsString>) -> (Vec<String>, Vec<OsString>) {
    let mut positionals = Vec::new();
    let mut filtered = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();

    if let Some(program) = iter.next() {
        filtered.push(program);
    }

    while let Some(arg) = iter.next() {
        let text = arg.to_string_lossy().into_owned();
        if text == "--" {
            positionals.extend(iter.by_ref().map(|rest| rest.to_string_lossy().into_owned()));
            break;
        }
        if text.starts_with('-') && text.len() > 1 {
            let takes_value =
                VALUE_FLAGS.contains(&text.as_str()) || VALUE_SHORT_FLAGS.contains(&text.as_str());
            filtered.push(arg);
            if takes_value && let Some(value) = iter.next() {
                filtered.push(value);
            }
            continue;
        }
        positionals.push(text);
    }

    (positionals, filtered)
}

/// Resolves positionals into an `(owner, repository)` pair.
///
/// Accepts `owner repo` or a single `owner/repo` / `owner.repo`, split on
/// the first separator.
///
/// # Errors
///
/// Returns [`PersentError::Usage`] for any other shape.
pub fn parse_repository_arguments(
    positionals: &[String],
) -> Result<(String, String), PersentError> {
    match positionals {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.clone(), repo.clone()))
        }
        [combined] => split_combined(combined).ok_or(PersentError::Usage),
        _ => Err(PersentError::Usage),
    }
}

fn split_combined(combined: &str) -> Option<(String, String)> {
    let (owner, repo) = combined.split_once(['/', '.'])?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner.to_owned(), repo.to_owned()))
}
