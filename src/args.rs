//! Positional argument validation.
//!
//! The two positional values are taken as raw strings and checked here rather
//! than by clap, so that the exact messages and ordering rules hold: every
//! character of every token is checked first (stopping at the first bad
//! token), and only then is the token count checked. Tokens are checked as
//! raw bytes, so arguments that are not valid UTF-8 are rejected the same way.

use std::ffi::OsStr;
use std::mem;

use thiserror::Error;

/// Largest accepted sample size: the most `f64` values a `Vec` can address.
pub const MAX_COUNT: u64 = (isize::MAX as usize / mem::size_of::<f64>()) as u64;

/// Errors raised while validating the positional arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    /// A token contains something other than ASCII digits, does not fit in a
    /// `u64`, or asks for more than [`MAX_COUNT`] samples.
    #[error("invalid argument")]
    InvalidArgument,
    /// All tokens were numeric but there were not exactly two of them.
    #[error(
        "invalid number of arguments. Must be in this format. ([size of data], [maximum value of data])"
    )]
    InvalidArity,
}

/// Validated sample size and scaling divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleArgs {
    /// Number of values to generate.
    pub count: u64,
    /// Divisor applied to the first draw of every value.
    pub scale: u64,
}

/// Validate `tokens` (program name excluded) and convert them.
///
/// An empty token passes the digit check and is read as `0`.
///
/// # Errors
/// - [`ArgError::InvalidArgument`] for the first token holding a non-digit,
///   and for a count above [`MAX_COUNT`].
/// - [`ArgError::InvalidArity`] when every token is numeric but there are not
///   exactly two.
pub fn parse_args<S: AsRef<OsStr>>(tokens: &[S]) -> Result<SampleArgs, ArgError> {
    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        values.push(parse_token(token.as_ref())?);
    }

    match values.as_slice() {
        [count, _] if *count > MAX_COUNT => Err(ArgError::InvalidArgument),
        [count, scale] => Ok(SampleArgs {
            count: *count,
            scale: *scale,
        }),
        _ => Err(ArgError::InvalidArity),
    }
}

fn parse_token(token: &OsStr) -> Result<u64, ArgError> {
    let bytes = token.as_encoded_bytes();
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(ArgError::InvalidArgument);
    }
    if bytes.is_empty() {
        return Ok(0);
    }
    token
        .to_str()
        .and_then(|s| s.parse().ok())
        .ok_or(ArgError::InvalidArgument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_numbers() {
        let args = parse_args(&["100", "7"]).unwrap();
        assert_eq!(args, SampleArgs { count: 100, scale: 7 });
    }

    #[test]
    fn test_leading_zeros() {
        let args = parse_args(&["007", "0"]).unwrap();
        assert_eq!(args, SampleArgs { count: 7, scale: 0 });
    }

    #[test]
    fn test_empty_token_reads_as_zero() {
        let args = parse_args(&["", "5"]).unwrap();
        assert_eq!(args.count, 0);
        assert_eq!(args.scale, 5);
    }

    #[test]
    fn test_rejects_sign_and_decimal() {
        assert_eq!(parse_args(&["-5", "10"]), Err(ArgError::InvalidArgument));
        assert_eq!(parse_args(&["+5", "10"]), Err(ArgError::InvalidArgument));
        assert_eq!(parse_args(&["5", "1.5"]), Err(ArgError::InvalidArgument));
        assert_eq!(parse_args(&["5 ", "10"]), Err(ArgError::InvalidArgument));
    }

    #[test]
    fn test_character_check_runs_before_arity() {
        // one bad token among the wrong number of tokens still reports the character
        assert_eq!(parse_args(&["abc"]), Err(ArgError::InvalidArgument));
        assert_eq!(
            parse_args(&["1", "2", "x3"]),
            Err(ArgError::InvalidArgument)
        );
    }

    #[test]
    fn test_wrong_arity() {
        let none: [&str; 0] = [];
        assert_eq!(parse_args(&none), Err(ArgError::InvalidArity));
        assert_eq!(parse_args(&["5"]), Err(ArgError::InvalidArity));
        assert_eq!(parse_args(&["5", "10", "15"]), Err(ArgError::InvalidArity));
    }

    #[test]
    fn test_overflow_is_invalid() {
        assert_eq!(
            parse_args(&["99999999999999999999999", "1"]),
            Err(ArgError::InvalidArgument)
        );
    }

    #[test]
    fn test_count_bound() {
        let at_bound = MAX_COUNT.to_string();
        assert_eq!(parse_args(&[at_bound.as_str(), "1"]).unwrap().count, MAX_COUNT);
        assert_eq!(
            parse_args(&["18446744073709551615", "1"]),
            Err(ArgError::InvalidArgument)
        );
        // the bound applies to the sample size only
        assert_eq!(
            parse_args(&["3", "18446744073709551615"]).unwrap().scale,
            u64::MAX
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_token_rejected() {
        use std::os::unix::ffi::OsStrExt;

        let bad = OsStr::from_bytes(&[0xff, b'5']);
        assert_eq!(
            parse_args(&[bad, OsStr::new("5")]),
            Err(ArgError::InvalidArgument)
        );
    }

    #[test]
    fn test_os_string_tokens() {
        let tokens = vec![std::ffi::OsString::from("12"), std::ffi::OsString::from("4")];
        assert_eq!(parse_args(&tokens).unwrap(), SampleArgs { count: 12, scale: 4 });
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digit five
        assert_eq!(parse_args(&["\u{0665}", "1"]), Err(ArgError::InvalidArgument));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ArgError::InvalidArgument.to_string(), "invalid argument");
        assert_eq!(
            ArgError::InvalidArity.to_string(),
            "invalid number of arguments. Must be in this format. ([size of data], [maximum value of data])"
        );
    }
}
