use std::collections::HashSet;

fn has_glob_meta(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
}

/// Expand possible glob patterns in a list of input strings into concrete file paths.
///
/// Plain paths are kept as given, so missing files surface as read errors
/// later. A pattern matching nothing is an error.
pub fn expand_input_globs(inputs: &[String]) -> Result<Vec<String>, String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<String> = Vec::with_capacity(inputs.len());

    for input in inputs {
        if !has_glob_meta(input) {
            if seen.insert(input.clone()) {
                results.push(input.clone());
            }
            continue;
        }

        let paths =
            glob::glob(input).map_err(|e| format!("Invalid glob pattern '{}': {}", input, e))?;
        let mut matched = 0usize;
        for path in paths {
            let path = path.map_err(|e| format!("Cannot read {}: {}", input, e))?;
            if !path.is_file() {
                continue;
            }
            matched += 1;
            let path = path.to_string_lossy().to_string();
            if seen.insert(path.clone()) {
                results.push(path);
            }
        }

        if matched == 0 {
            return Err(format!("No files match pattern: {}", input));
        }
        log::debug!("{} matched {} file(s)", input, matched);
    }

    Ok(results)
}
