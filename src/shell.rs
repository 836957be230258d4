//! Shell-style argument quoting and splitting.
//!
//! The build step stores user arguments as one free-form string but tracks
//! build targets as discrete tokens; these helpers convert between the two
//! forms without invoking a real shell. Quoting is POSIX-single-quote style;
//! splitting understands single and double quotes but not escapes.

/// Quote one token for inclusion in a command-line string.
pub fn quote(arg: &str) -> String {
	if arg.is_empty() {
		"''".to_owned()
	} else if arg
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || "-_=+./:@,".contains(c))
	{
		arg.to_owned()
	} else {
		format!("'{}'", arg.replace('\'', "'\"'\"'"))
	}
}

/// Join tokens into a command-line string, quoting where needed.
pub fn join(args: &[String]) -> String {
	args.iter().map(|arg| quote(arg)).collect::<Vec<_>>().join(" ")
}

/// Append quoted tokens to an existing command-line string.
pub fn append(line: &str, args: &[String]) -> String {
	let mut out = line.trim_end().to_owned();
	for arg in args {
		if !out.is_empty() {
			out.push(' ');
		}
		out.push_str(&quote(arg));
	}
	out
}

/// Split a command-line string into tokens. Quotes group words and are
/// stripped; an unterminated quote runs to the end of the string.
pub fn split(line: &str) -> Vec<String> {
	let mut out: Vec<String> = Vec::new();
	let mut current = String::new();
	let mut in_single = false;
	let mut in_double = false;

	for ch in line.chars() {
		match ch {
			'\'' if !in_double => in_single = !in_single,
			'"' if !in_single => in_double = !in_double,
			c if c.is_whitespace() && !in_single && !in_double => {
				if !current.is_empty() {
					out.push(std::mem::take(&mut current));
				}
			}
			c => current.push(c),
		}
	}
	if !current.is_empty() {
		out.push(current);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_quote_plain_and_spaced() {
		assert_eq!(quote("all"), "all");
		assert_eq!(quote("dist clean"), "'dist clean'");
		assert_eq!(quote(""), "''");
		assert_eq!(quote("it's"), "'it'\"'\"'s'");
	}

	#[test]
	fn test_append_to_existing_line() {
		assert_eq!(
			append("-j4", &["all".to_owned(), "install dir".to_owned()]),
			"-j4 all 'install dir'"
		);
		assert_eq!(append("", &["clean".to_owned()]), "clean");
		assert_eq!(append("-k ", &[]), "-k");
	}

	#[test]
	fn test_split_respects_quotes() {
		assert_eq!(
			split("-j4 'dist clean' \"a b\""),
			vec!["-j4".to_owned(), "dist clean".to_owned(), "a b".to_owned()]
		);
		assert_eq!(split("  "), Vec::<String>::new());
	}

	#[test]
	fn test_join_round_trips_simple_tokens() {
		let tokens = vec!["make".to_owned(), "a b".to_owned()];
		assert_eq!(split(&join(&tokens)), tokens);
	}
}
