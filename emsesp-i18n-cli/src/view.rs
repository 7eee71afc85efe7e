use emsesp_i18n::{Args, LocaleTable, Message};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Options for the `show` command.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub key_filter: Option<String>,
    pub full: bool,
    pub width: usize,
}

/// Cut `value` to at most `width` display columns, marking the cut with `...`.
pub fn truncate(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for ch in value.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out.push_str("...");
    out
}

fn format_value(message: &Message, opts: &ViewOptions) -> String {
    let shown = |value: &str| {
        if opts.full {
            value.to_string()
        } else {
            truncate(value, opts.width)
        }
    };

    match message {
        Message::Text(text) => shown(text),
        Message::List(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("\n      [{}] {}", i, shown(item)))
            .collect(),
    }
}

/// Print a view of the entries in a table.
pub fn print_view(table: &LocaleTable, opts: &ViewOptions) -> Result<(), String> {
    let filter = opts.key_filter.as_deref().map(str::to_ascii_uppercase);
    let entries: Vec<_> = table
        .entries()
        .iter()
        .filter(|entry| {
            filter
                .as_deref()
                .is_none_or(|filter| entry.key.to_ascii_uppercase().contains(filter))
        })
        .collect();

    if entries.is_empty() {
        return Err(match &opts.key_filter {
            Some(filter) => format!("No entries match key filter: {}", filter),
            None => "No entries found".to_string(),
        });
    }

    println!("=== Table ===");
    println!("Language: {}", table.language());
    if !table.metadata().domain.is_empty() {
        println!("Domain: {}", table.metadata().domain);
    }
    println!(
        "Entries: {} ({} pending)",
        entries.len(),
        entries.iter().filter(|entry| entry.is_pending()).count()
    );

    for entry in entries {
        let marker = if entry.is_pending() { " [pending]" } else { "" };
        println!(
            "\n  {}{}: {}",
            entry.key,
            marker,
            format_value(&entry.value, opts)
        );
        if let Some(comment) = &entry.comment {
            println!("    # {}", comment);
        }
    }

    Ok(())
}

/// Parse `name=value` pairs given with `--arg`.
pub fn parse_args(pairs: &[String]) -> Result<Args, String> {
    let mut args = Args::new();
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("Invalid argument '{}'. Expected name=value", pair))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("Invalid argument '{}'. Name cannot be empty", pair));
        }
        args.insert(name, value);
    }
    Ok(args)
}

/// Render one message, or one item of a list message.
pub fn lookup(
    table: &LocaleTable,
    key: &str,
    args: &Args,
    index: Option<usize>,
) -> Result<String, String> {
    match (table.get(key), index) {
        (None, _) => Err(emsesp_i18n::Error::unknown_key(table.language(), key).to_string()),
        (Some(Message::List(items)), Some(index)) => items.get(index).cloned().ok_or_else(|| {
            format!(
                "Index {} out of range for `{}` ({} items)",
                index,
                key,
                items.len()
            )
        }),
        (Some(Message::List(items)), None) => Ok(items.join("\n")),
        (Some(Message::Text(_)), Some(_)) => Err(format!("`{}` is a text, not a list", key)),
        (Some(Message::Text(_)), None) => table.render(key, args).map_err(|e| e.to_string()),
    }
}
