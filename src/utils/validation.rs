use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn parse_integer(field_name: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CalcError::InvalidInput {
            field: field_name.to_string(),
            value: raw.to_string(),
        })
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(CalcError::InvalidArgument {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}

/// Operation tokens are opaque identifiers, never command fragments.
/// Restricting the charset keeps them safe to log and echo verbatim.
pub fn validate_op_token(token: &str) -> Result<()> {
    let well_formed = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(CalcError::UnknownOperation {
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("x", "12").unwrap(), 12);
        assert_eq!(parse_integer("x", " -3 ").unwrap(), -3);
        assert!(parse_integer("x", "twelve").is_err());
        assert!(parse_integer("x", "12.5").is_err());
        assert!(parse_integer("x", "").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("n", 0).is_ok());
        assert!(validate_non_negative("n", 10).is_ok());
        assert!(validate_non_negative("n", -1).is_err());
    }

    #[test]
    fn test_validate_op_token() {
        assert!(validate_op_token("refresh-notes").is_ok());
        assert!(validate_op_token("op2").is_ok());
        assert!(validate_op_token("").is_err());
        assert!(validate_op_token("rm -rf /").is_err());
        assert!(validate_op_token("a;b").is_err());
        assert!(validate_op_token("$(whoami)").is_err());
    }
}
