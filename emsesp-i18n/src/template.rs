//! Placeholder substitution and plural resolution for message text.
//!
//! Message text may contain:
//!
//! - `{0}`, `{name}`: replaced by the caller's argument of that name. A type
//!   annotation after `:` (`{num:number}`) is accepted and ignored.
//! - `{{singular|plural}}`: resolved against a numeric argument. `{{s}}` is
//!   shorthand for `{{|s}}`; three forms read `zero|one|other` and six forms
//!   read `zero|one|two|few|many|other`.
//!
//! A plural block may name its argument (`{{num:Dispositivo|Dispositivi}}`).
//! Otherwise it counts with the nearest argument before it, else the first
//! argument after it, else positional argument `0`.
//!
//! ```rust
//! use emsesp_i18n::template::{Args, render};
//!
//! let text = render("{num} Dispositivi {{s}}", "it", &Args::new().with("num", 3))?;
//! assert_eq!(text, "3 Dispositivi s");
//! # Ok::<(), emsesp_i18n::Error>(())
//! ```

use std::fmt::Display;

use crate::{
    error::Error,
    plural_rules::{PluralCategory, category_for, parse_language},
};

/// A caller-supplied argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl ArgValue {
    /// Numeric view used for plural selection. Text counts if it parses as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ArgValue::Text(text) => text.trim().parse().ok(),
            ArgValue::Int(value) => Some(*value as f64),
            ArgValue::Float(value) => Some(*value),
        }
    }
}

impl Display for ArgValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgValue::Text(text) => write!(f, "{}", text),
            ArgValue::Int(value) => write!(f, "{}", value),
            ArgValue::Float(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Text(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        ArgValue::Float(value as f64)
    }
}

macro_rules! int_arg_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(value: $ty) -> Self {
                    ArgValue::Int(value as i64)
                }
            }
        )*
    };
}

int_arg_value!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Named arguments for rendering, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<(String, ArgValue)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments named `0`, `1`, ... in order.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ArgValue>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(position, value)| (position.to_string(), value))
            .collect()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an argument, replacing an earlier value of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut args = Args::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// Alternative texts selected by a count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralBlock {
    forms: Vec<String>,
    argument: String,
}

impl PluralBlock {
    /// Forms in `one|other`, `zero|one|other` or six-category order.
    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    /// Name of the argument supplying the count.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    fn select(&self, category: PluralCategory, count: f64) -> &str {
        let position = match self.forms.len() {
            3 if count == 0.0 => 0,
            3 if category == PluralCategory::One => 1,
            3 => 2,
            6 if count == 0.0 => 0,
            6 => match category {
                PluralCategory::Zero => 0,
                PluralCategory::One => 1,
                PluralCategory::Two => 2,
                PluralCategory::Few => 3,
                PluralCategory::Many => 4,
                PluralCategory::Other => 5,
            },
            _ if category == PluralCategory::One => 0,
            _ => 1,
        };
        &self.forms[position]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Argument(String),
    Plural(PluralBlock),
}

/// A parsed message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses message text. Unbalanced braces are kept as literal text;
    /// plural blocks with an unsupported number of forms are rejected.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = input;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            rest = &rest[open..];

            if let Some(body_and_tail) = rest.strip_prefix("{{") {
                if let Some(close) = body_and_tail.find("}}") {
                    let body = &body_and_tail[..close];
                    let (argument, body) = match body.split_once(':') {
                        Some((name, forms)) if is_argument_name(name) => (name, forms),
                        _ => ("", body),
                    };
                    flush_literal(&mut literal, &mut segments);
                    segments.push(Segment::Plural(PluralBlock {
                        forms: plural_forms(body)?,
                        argument: argument.to_string(),
                    }));
                    rest = &body_and_tail[close + 2..];
                    continue;
                }
            } else if let Some(close) = rest[1..].find('}') {
                let body = &rest[1..1 + close];
                if let Some(name) = argument_name(body) {
                    flush_literal(&mut literal, &mut segments);
                    segments.push(Segment::Argument(name.to_string()));
                    rest = &rest[close + 2..];
                    continue;
                }
            }

            literal.push('{');
            rest = &rest[1..];
        }
        literal.push_str(rest);
        flush_literal(&mut literal, &mut segments);

        bind_plural_arguments(&mut segments);
        Ok(Template { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct argument names referenced by placeholders or plural blocks, in order.
    pub fn argument_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            let name = match segment {
                Segment::Argument(name) => name.as_str(),
                Segment::Plural(block) => block.argument(),
                Segment::Literal(_) => continue,
            };
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    pub fn plural_blocks(&self) -> impl Iterator<Item = &PluralBlock> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Plural(block) => Some(block),
            _ => None,
        })
    }

    /// Renders with `args`, using the plural rules of `language`.
    pub fn render(&self, language: &str, args: &Args) -> Result<String, Error> {
        let lang_id = parse_language(language);
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Argument(name) => {
                    let value = args
                        .get(name)
                        .ok_or_else(|| Error::MissingArgument(name.clone()))?;
                    out.push_str(&value.to_string());
                }
                Segment::Plural(block) => {
                    let value = args
                        .get(block.argument())
                        .ok_or_else(|| Error::MissingArgument(block.argument().to_string()))?;
                    let count = value.as_number().ok_or_else(|| Error::NotNumeric {
                        name: block.argument().to_string(),
                        value: value.to_string(),
                    })?;
                    out.push_str(block.select(category_for(&lang_id, count), count));
                }
            }
        }

        Ok(out)
    }
}

/// Parses and renders `template` in one step.
pub fn render(template: &str, language: &str, args: &Args) -> Result<String, Error> {
    Template::parse(template)?.render(language, args)
}

fn flush_literal(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

fn is_argument_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn argument_name(body: &str) -> Option<&str> {
    let name = body.split(':').next().unwrap_or_default().trim();
    is_argument_name(name).then_some(name)
}

fn plural_forms(body: &str) -> Result<Vec<String>, Error> {
    let mut forms: Vec<String> = body.split('|').map(str::to_string).collect();
    match forms.len() {
        1 => {
            forms.insert(0, String::new());
            Ok(forms)
        }
        2 | 3 | 6 => Ok(forms),
        n => Err(Error::InvalidTemplate(format!(
            "plural block `{{{{{}}}}}` has {} forms; expected 1, 2, 3 or 6",
            body, n
        ))),
    }
}

fn bind_plural_arguments(segments: &mut [Segment]) {
    let argument_at = |segment: &Segment| match segment {
        Segment::Argument(name) => Some(name.clone()),
        _ => None,
    };

    for position in 0..segments.len() {
        let Segment::Plural(block) = &segments[position] else {
            continue;
        };
        if !block.argument.is_empty() {
            continue;
        }
        let bound = segments[..position]
            .iter()
            .rev()
            .find_map(argument_at)
            .or_else(|| segments[position + 1..].iter().find_map(argument_at))
            .unwrap_or_else(|| "0".to_string());
        if let Segment::Plural(block) = &mut segments[position] {
            block.argument = bound;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn it(template: &str, args: &Args) -> String {
        render(template, "it", args).unwrap()
    }

    #[test]
    fn test_positional_argument() {
        let args = Args::positional(["Username"]);
        assert_eq!(it("{0} é richiesto", &args), "Username é richiesto");
    }

    #[test]
    fn test_named_argument() {
        let args = Args::new().with("name", "admin");
        assert_eq!(it("Registrato come {name}", &args), "Registrato come admin");
    }

    #[test]
    fn test_type_annotation_is_ignored() {
        let args = Args::new().with("num", 4);
        assert_eq!(it("{num:number} ore", &args), "4 ore");
    }

    #[test]
    fn test_shorthand_plural() {
        let three = Args::new().with("num", 3);
        assert_eq!(it("{num} Dispositivi {{s}}", &three), "3 Dispositivi s");

        let one = Args::new().with("num", 1);
        assert_eq!(it("{num} Dispositivi {{s}}", &one), "1 Dispositivi ");

        let zero = Args::new().with("num", 0);
        assert_eq!(it("{num} Dispositivi {{s}}", &zero), "0 Dispositivi s");
    }

    #[test]
    fn test_two_form_plural_binds_to_argument_zero() {
        assert_eq!(it("{{Valore|valore}}", &Args::positional([1])), "Valore");
        assert_eq!(it("{{Valore|valore}}", &Args::positional([2])), "valore");
    }

    #[test]
    fn test_plural_binds_to_following_argument_when_none_precedes() {
        let template = Template::parse("{{Un|Alcuni}} dispositivi: {count}").unwrap();
        let block = template.plural_blocks().next().unwrap();
        assert_eq!(block.argument(), "count");
        assert_eq!(
            template
                .render("it", &Args::new().with("count", 1))
                .unwrap(),
            "Un dispositivi: 1"
        );
    }

    #[test]
    fn test_plural_binds_to_nearest_preceding_argument() {
        let template = Template::parse("{a} e {b} {{x|y}}").unwrap();
        assert_eq!(template.plural_blocks().next().unwrap().argument(), "b");
    }

    #[test]
    fn test_zero_form() {
        let template = "{n} {{nessuno|uno|molti}}";
        assert_eq!(it(template, &Args::new().with("n", 0)), "0 nessuno");
        assert_eq!(it(template, &Args::new().with("n", 1)), "1 uno");
        assert_eq!(it(template, &Args::new().with("n", 9)), "9 molti");
    }

    #[test]
    fn test_six_forms_follow_language_categories() {
        let template = "{n} {{z|o|t|f|m|x}}";
        let render_ru = |n: i64| render(template, "ru", &Args::new().with("n", n)).unwrap();
        assert_eq!(render_ru(0), "0 z");
        assert_eq!(render_ru(21), "21 o");
        assert_eq!(render_ru(3), "3 f");
        assert_eq!(render_ru(5), "5 m");
        assert_eq!(render(template, "ru", &Args::new().with("n", 1.5)).unwrap(), "1.5 x");
    }

    #[test]
    fn test_numeric_text_counts() {
        let args = Args::new().with("num", "2");
        assert_eq!(it("{num} ore {{s}}", &args), "2 ore s");
    }

    #[test]
    fn test_non_numeric_count_is_rejected() {
        let args = Args::new().with("num", "molti");
        let err = render("{num} ore {{s}}", "it", &args).unwrap_err();
        assert!(matches!(err, Error::NotNumeric { name, .. } if name == "num"));
    }

    #[test]
    fn test_missing_argument() {
        let err = render("Impostazioni {0}", "it", &Args::new()).unwrap_err();
        assert!(matches!(err, Error::MissingArgument(name) if name == "0"));
    }

    #[test]
    fn test_plural_block_names_its_argument() {
        let args = Args::new().with("name", "Caldaia").with("num", 1);
        assert_eq!(
            it("{name}: {num} {{num:Dispositivo|Dispositivi}}", &args),
            "Caldaia: 1 Dispositivo"
        );

        let template = Template::parse("{{count:ora|ore}} {name}").unwrap();
        assert_eq!(template.argument_names(), vec!["count", "name"]);
        let args = Args::new().with("name", "x").with("count", 5);
        assert_eq!(template.render("it", &args).unwrap(), "ore x");

        // A prefix that is not an argument name stays part of the first form.
        let template = Template::parse("{n} {{a b:uno|molti}}").unwrap();
        let block = template.plural_blocks().next().unwrap();
        assert_eq!(block.argument(), "n");
        assert_eq!(block.forms(), ["a b:uno", "molti"]);
    }

    #[test]
    fn test_invalid_plural_arity() {
        let err = Template::parse("{n} {{a|b|c|d}}").unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate(_)));
    }

    #[test]
    fn test_unbalanced_braces_are_literal() {
        let args = Args::new();
        assert_eq!(it("a { b", &args), "a { b");
        assert_eq!(it("a {{ b", &args), "a {{ b");
        assert_eq!(it("{not an arg}", &args), "{not an arg}");
        assert_eq!(it("}", &args), "}");
    }

    #[test]
    fn test_text_without_markup_is_unchanged() {
        let text = "Sei sicuro di voler riavviare EMS-ESP?";
        assert_eq!(it(text, &Args::new()), text);
        assert_eq!(
            Template::parse(text).unwrap().segments(),
            &[Segment::Literal(text.to_string())]
        );
    }

    #[test]
    fn test_argument_names() {
        let template = Template::parse("{num} {name} {num} {{s}}").unwrap();
        assert_eq!(template.argument_names(), vec!["num", "name"]);

        let template = Template::parse("{{Valore|valore}}").unwrap();
        assert_eq!(template.argument_names(), vec!["0"]);
    }

    #[test]
    fn test_args_insert_replaces() {
        let args = Args::new().with("a", 1).with("a", "due");
        assert_eq!(args.len(), 1);
        assert_eq!(args.get("a"), Some(&ArgValue::Text("due".to_string())));
    }
}
