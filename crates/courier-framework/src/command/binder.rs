//! Parameter binding.

use courier_core::{EntityStore, Snowflake};
use tracing::trace;

use super::param::{EntityKind, ParamType, ParameterDescriptor};
use super::reference::{decode_reference, is_reference};
use super::split::join_tokens;
use super::value::{Arguments, Value};
use crate::error::{ArgumentError, ConversionError};

/// Binds `tokens` to `params` in declaration order.
///
/// Binding is fail-fast: the first parameter that cannot be satisfied ends
/// binding and nothing after it is attempted.
///
/// - More tokens than declared parameters (optional ones included) fails
///   before any parameter is looked at.
/// - Tokens are matched to parameters by position. Optional parameters are
///   never bound, and the token in their position is dropped.
/// - Reference tokens are only decoded when `group` is set; in private
///   messages they are treated as literals.
pub fn bind(
    params: &[ParameterDescriptor],
    tokens: &[String],
    group: bool,
    store: Option<&dyn EntityStore>,
) -> Result<Arguments, ArgumentError> {
    if tokens.len() > params.len() {
        return Err(ArgumentError::too_many(params.len(), tokens.len()));
    }

    let mut args = Arguments::new();

    for (i, param) in params.iter().enumerate() {
        if param.is_optional() {
            continue;
        }

        let Some(token) = tokens.get(i) else {
            return Err(ArgumentError::missing(param.name()));
        };

        let value = if param.is_last_positional() {
            Ok(Value::Text(join_tokens(&tokens[i..])))
        } else if group && is_reference(token) {
            decode_reference(param.ty(), token, store)
                .map_err(ConversionError::from)
                .and_then(|value| value.convert(param.ty()))
        } else {
            parse_literal(param.ty(), token)
        };

        let value = value.map_err(|cause| ArgumentError::conversion(param.name(), token, cause))?;
        trace!(parameter = param.name(), value = value.type_name(), "bound argument");
        args.push(param.name(), value);
    }

    Ok(args)
}

/// Parses a plain token as a value of type `ty`.
pub fn parse_literal(ty: ParamType, token: &str) -> Result<Value, ConversionError> {
    match ty {
        ParamType::Text => Ok(Value::Text(token.to_string())),
        ParamType::Integer => token
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(ConversionError::Integer),
        ParamType::Float => token
            .parse::<f64>()
            .map(Value::Float)
            .map_err(ConversionError::Float),
        ParamType::Boolean => {
            if token.eq_ignore_ascii_case("true") {
                Ok(Value::Boolean(true))
            } else if token.eq_ignore_ascii_case("false") {
                Ok(Value::Boolean(false))
            } else {
                Err(ConversionError::Boolean)
            }
        }
        ParamType::Id => Ok(Value::Id(token.parse::<Snowflake>()?)),
        ParamType::Channel { .. } => Err(ConversionError::ReferenceExpected(EntityKind::Channel)),
        ParamType::Role => Err(ConversionError::ReferenceExpected(EntityKind::Role)),
        ParamType::Emoji { .. } => Err(ConversionError::ReferenceExpected(EntityKind::Emoji)),
        ParamType::User { .. } => Err(ConversionError::ReferenceExpected(EntityKind::User)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArgumentErrorKind, ReferenceError};
    use courier_core::{Channel, EntityCache, MinimalChannel, MinimalUser, PartialEmoji};

    const CHANNEL: &str = "<#123456789012345678>";

    fn params(decl: &[(&str, ParamType, bool)]) -> Vec<ParameterDescriptor> {
        let mut params: Vec<_> = decl
            .iter()
            .map(|(name, ty, optional)| ParameterDescriptor::new(*name, *ty, *optional))
            .collect();
        if let Some(last) = params.last_mut() {
            last.mark_last();
        }
        params
    }

    fn tokens(text: &str) -> Vec<String> {
        text.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_binds_primitives_in_order() {
        let params = params(&[
            ("count", ParamType::Integer, false),
            ("ratio", ParamType::Float, false),
            ("loud", ParamType::Boolean, false),
        ]);
        let args = bind(&params, &tokens("3 0.5 TRUE"), true, None).unwrap();
        assert_eq!(args.get::<i64>("count"), Some(3));
        assert_eq!(args.get::<f64>("ratio"), Some(0.5));
        assert_eq!(args.get::<bool>("loud"), Some(true));
    }

    #[test]
    fn test_last_text_absorbs_rest() {
        let params = params(&[
            ("user", ParamType::User { resolved: false }, false),
            ("reason", ParamType::Text, false),
        ]);
        let args = bind(
            &params,
            &tokens("<@123456789012345678> spamming 42 <#123456789012345678>"),
            true,
            None,
        )
        .unwrap();
        assert_eq!(
            args.get::<MinimalUser>("user"),
            Some(MinimalUser::new(Snowflake::new(123_456_789_012_345_678)))
        );
        assert_eq!(
            args.get::<String>("reason").as_deref(),
            Some("spamming 42 <#123456789012345678>")
        );
    }

    #[test]
    fn test_non_last_text_takes_one_token() {
        let params = params(&[
            ("word", ParamType::Text, false),
            ("count", ParamType::Integer, false),
        ]);
        let args = bind(&params, &tokens("hello 2"), false, None).unwrap();
        assert_eq!(args.get::<String>("word").as_deref(), Some("hello"));
        assert_eq!(args.get::<i64>("count"), Some(2));
    }

    #[test]
    fn test_too_many_arguments() {
        let params = params(&[("count", ParamType::Integer, false)]);
        let err = bind(&params, &tokens("1 2"), true, None).unwrap_err();
        assert_eq!(err, ArgumentError::too_many(1, 2));
        assert!(err.parameter.is_none());
    }

    #[test]
    fn test_too_many_counts_optional_params() {
        let params = params(&[
            ("days", ParamType::Integer, true),
            ("count", ParamType::Integer, false),
        ]);
        assert!(bind(&params, &tokens("1 2"), true, None).is_ok());
        let err = bind(&params, &tokens("1 2 3"), true, None).unwrap_err();
        assert_eq!(err.kind, ArgumentErrorKind::TooManyArguments { expected: 2, got: 3 });
    }

    #[test]
    fn test_missing_argument() {
        let params = params(&[
            ("count", ParamType::Integer, false),
            ("sides", ParamType::Integer, false),
        ]);
        let err = bind(&params, &tokens("1"), true, None).unwrap_err();
        assert_eq!(err, ArgumentError::missing("sides"));
        assert!(err.raw.is_none());
    }

    #[test]
    fn test_fail_fast_reports_first_failure() {
        let params = params(&[
            ("a", ParamType::Integer, false),
            ("b", ParamType::Boolean, false),
            ("c", ParamType::Integer, false),
        ]);
        let err = bind(&params, &tokens("1 nope nope"), true, None).unwrap_err();
        assert_eq!(err.parameter.as_deref(), Some("b"));
        assert_eq!(err.raw.as_deref(), Some("nope"));
        assert_eq!(
            err.kind,
            ArgumentErrorKind::Conversion(ConversionError::Boolean)
        );
    }

    #[test]
    fn test_optional_position_drops_its_token() {
        let params = params(&[
            ("days", ParamType::Integer, true),
            ("count", ParamType::Integer, false),
            ("label", ParamType::Integer, false),
        ]);
        let args = bind(&params, &tokens("7 8 9"), true, None).unwrap();
        assert!(!args.contains("days"));
        assert_eq!(args.get::<i64>("count"), Some(8));
        assert_eq!(args.get::<i64>("label"), Some(9));
    }

    #[test]
    fn test_optional_position_still_needs_a_token() {
        let params = params(&[
            ("days", ParamType::Integer, true),
            ("count", ParamType::Integer, false),
        ]);
        let err = bind(&params, &tokens("7"), true, None).unwrap_err();
        assert_eq!(err, ArgumentError::missing("count"));
    }

    #[test]
    fn test_last_text_after_optional_joins_from_its_position() {
        let params = params(&[
            ("days", ParamType::Integer, true),
            ("reason", ParamType::Text, false),
        ]);
        let args = bind(&params, &tokens("a b"), true, None).unwrap();
        assert_eq!(args.get::<String>("reason").as_deref(), Some("b"));
    }

    #[test]
    fn test_references_are_literals_in_private_messages() {
        let params = params(&[
            ("channel", ParamType::Channel { resolved: false }, false),
            ("n", ParamType::Integer, false),
        ]);
        let err = bind(&params, &tokens(&format!("{CHANNEL} 1")), false, None).unwrap_err();
        assert_eq!(
            err.kind,
            ArgumentErrorKind::Conversion(ConversionError::ReferenceExpected(EntityKind::Channel))
        );

        let args = bind(&params, &tokens(&format!("{CHANNEL} 1")), true, None).unwrap();
        assert_eq!(
            args.get::<MinimalChannel>("channel"),
            Some(MinimalChannel::new(Snowflake::new(123_456_789_012_345_678)))
        );
    }

    #[test]
    fn test_reference_errors_surface_as_conversion_failures() {
        let params = params(&[
            ("channel", ParamType::Channel { resolved: true }, false),
            ("n", ParamType::Integer, false),
        ]);
        let err = bind(&params, &tokens(&format!("{CHANNEL} 1")), true, None).unwrap_err();
        assert_eq!(err.parameter.as_deref(), Some("channel"));
        assert_eq!(err.raw.as_deref(), Some(CHANNEL));
        assert_eq!(
            err.reference_error(),
            Some(&ReferenceError::CacheRequired(EntityKind::Channel))
        );

        let cache = EntityCache::new();
        cache.insert_channel(Channel::new(Snowflake::new(123_456_789_012_345_678), "general"));
        let args = bind(&params, &tokens(&format!("{CHANNEL} 1")), true, Some(&cache)).unwrap();
        assert_eq!(
            args.get::<Channel>("channel").map(|c| c.name),
            Some("general".to_string())
        );
    }

    #[test]
    fn test_reference_id_converts_to_integer() {
        let params = params(&[
            ("id", ParamType::Integer, false),
            ("emoji", ParamType::Emoji { resolved: false }, false),
        ]);
        let args = bind(
            &params,
            &tokens("<@&123456789012345678> <a:party:223456789012345678>"),
            true,
            None,
        )
        .unwrap();
        assert_eq!(args.get::<i64>("id"), Some(123_456_789_012_345_678));
        assert_eq!(
            args.get::<PartialEmoji>("emoji"),
            Some(PartialEmoji::new(
                Snowflake::new(223_456_789_012_345_678),
                "party",
                true
            ))
        );
    }

    #[test]
    fn test_empty_tokens_count_as_arguments() {
        let params = params(&[
            ("count", ParamType::Integer, false),
            ("sides", ParamType::Integer, false),
        ]);
        let err = bind(&params, &tokens("1  "), true, None).unwrap_err();
        assert!(matches!(err.kind, ArgumentErrorKind::TooManyArguments { .. }));

        let err = bind(&params, &tokens("1 "), true, None).unwrap_err();
        assert_eq!(err.parameter.as_deref(), Some("sides"));
        assert_eq!(err.raw.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_literal_id() {
        assert_eq!(
            parse_literal(ParamType::Id, "42").unwrap(),
            Value::Id(Snowflake::new(42))
        );
        assert!(matches!(
            parse_literal(ParamType::Id, "abc"),
            Err(ConversionError::Id(_))
        ));
    }
}
